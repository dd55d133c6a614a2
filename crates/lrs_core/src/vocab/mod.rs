//! Caliper vocabulary symbols and the xAPI lookup tables.
//!
//! # Responsibility
//! - Define the closed Caliper symbol sets (actions, entity types, event types).
//! - Map those symbols to and from xAPI verb/activity-type IRIs.
//!
//! # Invariants
//! - Symbol parsing is total: unknown IRIs yield `None`, never an error.
//! - Tables are immutable once built and safe to share across threads.

/// Declares a closed Caliper symbol set backed by IRIs.
macro_rules! caliper_symbols {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $iri:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every symbol in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Caliper IRI for this symbol.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $iri, )+
                }
            }

            /// Parses a Caliper IRI into a symbol.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $iri => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod action;
pub mod entity_type;
pub mod event_type;
pub mod tables;
