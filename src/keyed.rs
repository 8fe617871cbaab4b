/// Declares a closed enum addressed by camelCase string keys.
///
/// Unknown keys resolve to the declared fallback variant and log a warning,
/// both through `from_key` and through serde, so a stale persisted key never
/// fails to load.
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident (fallback = $fallback:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(from = "String", into = "&'static str")]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the string key.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// Looks up a key without falling back.
            #[must_use]
            pub fn parse(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(Self::$variant),)+
                    _ => None,
                }
            }

            #[doc = concat!(
                "Looks up a key, falling back to `", stringify!($fallback), "` for unknown keys."
            )]
            #[must_use]
            pub fn from_key(key: &str) -> Self {
                Self::parse(key).unwrap_or_else(|| {
                    tracing::warn!(
                        key,
                        fallback = Self::$fallback.key(),
                        "unknown {} key",
                        stringify!($name)
                    );
                    Self::$fallback
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self::from_key(&key)
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.key()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}
