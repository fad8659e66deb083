//! Macros for declaring state payloads.

/// Declare an enum of state labels and implement
/// [`StateValue`](crate::core::StateValue) for it.
///
/// # Example
///
/// ```
/// use tickstate::state_enum;
/// use tickstate::core::StateValue;
///
/// state_enum! {
///     pub enum Motion {
///         Idle,
///         Walk,
///         Attack,
///     }
/// }
///
/// assert_eq!(Motion::Walk.name(), "Walk");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateValue for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
