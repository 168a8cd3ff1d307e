//! Serialization of vectors, matrices, and affine transforms.
//!
//! Every type serializes as its flat, ordered component array (column-major
//! for matrices, `[a, b, c, d, e, f]` for affine transforms), which is also
//! the JSON interchange form. Deserialization is the exact inverse and
//! rejects arrays of the wrong length.
//!
//! To round values before emission, serialize `value.rounded(digits)`.

use std::fmt;

use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{AffineTransform, Matrix, Vector};

impl<const N: usize> Serialize for Vector<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for component in self.as_slice() {
            tup.serialize_element(component)?;
        }
        tup.end()
    }
}

impl<'de, const N: usize> Deserialize<'de> for Vector<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VectorVisitor<const N: usize>;

        impl<'de, const N: usize> Visitor<'de> for VectorVisitor<N> {
            type Value = Vector<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an array of {N} numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut out = Vector::ZERO;
                for i in 0..N {
                    out[i] = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(out)
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor::<N>)
    }
}

impl<const R: usize, const C: usize> Serialize for Matrix<R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(R * C)?;
        for component in self.as_slice() {
            tup.serialize_element(component)?;
        }
        tup.end()
    }
}

impl<'de, const R: usize, const C: usize> Deserialize<'de> for Matrix<R, C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MatrixVisitor<const R: usize, const C: usize>;

        impl<'de, const R: usize, const C: usize> Visitor<'de> for MatrixVisitor<R, C> {
            type Value = Matrix<R, C>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an array of {} numbers in column-major order", R * C)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut out = Matrix::ZERO;
                let components = out.as_mut_slice();
                for i in 0..R * C {
                    components[i] = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(out)
            }
        }

        deserializer.deserialize_tuple(R * C, MatrixVisitor::<R, C>)
    }
}

impl Serialize for AffineTransform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AffineTransform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f32; 6]>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, AffineTransform, Mat2, Mat4, Vec2, Vec3};

    #[test]
    fn vector_json_round_trip() {
        let v = vec3(1.5, -2.0, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,0.25]");
        assert_eq!(serde_json::from_str::<Vec3>(&json).unwrap(), v);
    }

    #[test]
    fn vector_rejects_wrong_length() {
        assert!(serde_json::from_str::<Vec3>("[1.0, 2.0]").is_err());
        assert!(serde_json::from_str::<Vec2>("[1.0, 2.0, 3.0]").is_err());
        assert!(serde_json::from_str::<Vec2>("{}").is_err());
    }

    #[test]
    fn matrix_serializes_column_major() {
        let m = Mat2::from_rows([[1.0, 3.0], [2.0, 4.0]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");
        assert_eq!(serde_json::from_str::<Mat2>(&json).unwrap(), m);

        let m4 = Mat4::from_translation(vec3(1.0, 2.0, 3.0));
        let round_tripped: Mat4 =
            serde_json::from_str(&serde_json::to_string(&m4).unwrap()).unwrap();
        assert_eq!(round_tripped, m4);
    }

    #[test]
    fn affine_round_trip() {
        let t = AffineTransform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0,5.0,6.0]");
        assert_eq!(serde_json::from_str::<AffineTransform>(&json).unwrap(), t);
        assert!(serde_json::from_str::<AffineTransform>("[1.0,2.0]").is_err());
    }

    #[test]
    fn rounded_emission() {
        let v = vec2(1.0041234, 2.0);
        assert_eq!(serde_json::to_string(&v.rounded(2)).unwrap(), "[1.0,2.0]");
        assert_eq!(
            serde_json::to_string(&v.rounded(3)).unwrap(),
            "[1.004,2.0]"
        );
    }
}
