mod misuse;
pub mod patterns;

pub use misuse::MisuseClassifier;
