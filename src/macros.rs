//! Macros for declaring lifecycle state enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Besides the `State` impl, the macro generates an inherent `ALL` constant
/// listing every variant in declaration order, and a `Display` impl that
/// prints the variant name.
///
/// # Example
///
/// ```
/// use process_lifecycle::core::State;
/// use process_lifecycle::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq, Hash)]
///     pub enum JobState {
///         Queued,
///         Active,
///         Done,
///     }
///     final: [Done]
/// }
///
/// assert_eq!(JobState::ALL.len(), 3);
/// assert_eq!(JobState::Active.name(), "Active");
/// assert!(JobState::Done.is_final());
/// assert_eq!(JobState::Queued.to_string(), "Queued");
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

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
