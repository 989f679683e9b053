mod face_normal;
mod length;

pub use face_normal::FaceNormal;
pub use length::Length;
