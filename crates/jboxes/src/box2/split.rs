//! Pairs of boxes produced by splitting one box.

use crate::box2::Box2;

/// Result of `boxes::split_along_horizontal`: `upper` sits at the smaller y.
pub struct Box2HorizontalSplit<S> {
    pub upper: Box2<S>,
    pub lower: Box2<S>,
}

/// Result of `boxes::split_along_vertical`: `left` sits at the smaller x.
pub struct Box2VerticalSplit<S> {
    pub left: Box2<S>,
    pub right: Box2<S>,
}

macro_rules! split_pair_impls {
    ($name:ident, $a:ident, $b:ident) => {
        impl<S> $name<S> {
            pub fn new($a: Box2<S>, $b: Box2<S>) -> Self {
                Self { $a, $b }
            }
        }

        impl<S> Clone for $name<S> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<S> Copy for $name<S> {}

        impl<S> PartialEq for $name<S> {
            fn eq(&self, other: &Self) -> bool {
                self.$a == other.$a && self.$b == other.$b
            }
        }

        impl<S> Eq for $name<S> {}

        impl<S> std::fmt::Debug for $name<S> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field(stringify!($a), &self.$a)
                    .field(stringify!($b), &self.$b)
                    .finish()
            }
        }
    };
}

split_pair_impls!(Box2HorizontalSplit, upper, lower);
split_pair_impls!(Box2VerticalSplit, left, right);
