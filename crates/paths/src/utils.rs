/// Declares a new strongly-typed path newtype.
///
/// ```
/// # use awql_paths::path_type;
/// path_type! {
///     /// optional docs
///     FooPath: file // adds the utility methods for reading the file
/// }
/// ```
#[macro_export]
macro_rules! path_type {
    ($(#[doc = $doc:literal])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Clone, Debug, PartialEq, Eq, $crate::__serde::Serialize, $crate::__serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub std::path::PathBuf);

        impl AsRef<std::path::Path> for $name {
            #[inline]
            fn as_ref(&self) -> &std::path::Path {
                &self.0
            }
        }

        impl From<std::path::PathBuf> for $name {
            fn from(path: std::path::PathBuf) -> Self {
                Self(path)
            }
        }

        impl From<&str> for $name {
            fn from(path: &str) -> Self {
                Self(path.into())
            }
        }

        impl $name {
            #[inline]
            pub fn display(&self) -> std::path::Display<'_> {
                self.0.display()
            }
        }
    };
    ($(#[$($attr:tt)+])* $name:ident: file) => {
        path_type!($(#[$($attr)+])* $name);
        impl $name {
            pub fn read_to_string(&self) -> std::io::Result<String> {
                std::fs::read_to_string(self)
            }

            /// Create the parent directory of this path if it doesn't already exist.
            #[inline]
            pub fn create_parent(&self) -> std::io::Result<()> {
                if let Some(parent) = self.0.parent() {
                    if parent != std::path::Path::new("") {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                Ok(())
            }
        }
    };
}
pub(crate) use path_type;
