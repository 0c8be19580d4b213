//! Macros for ergonomic tag declarations.

/// Declare a tag enum and implement `StateTag` for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug` and serde's traits, so the calling crate needs `serde` as a
/// dependency.
///
/// # Example
///
/// ```
/// use logicblock::state_tags;
/// use logicblock::core::StateTag;
///
/// state_tags! {
///     pub enum TokenState {
///         Waiting,
///         Moving,
///         Consumed,
///     }
///     final: [Consumed]
/// }
///
/// assert_eq!(TokenState::Moving.name(), "Moving");
/// assert!(TokenState::Consumed.is_final());
/// ```
#[macro_export]
macro_rules! state_tags {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateTag for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
