//! 2D points in three tiers: a plain [`Point`], a [`ColourPoint`] carrying a
//! free-form colour label, and an [`AdvancedPoint`] whose colour must come from
//! a shared allow-list.
//!
//! Points compare by distance to the origin, not by coordinates. See
//! [`PlanarPoint`].

extern crate derive_more;
extern crate euclid;

#[macro_export]
macro_rules! pub_mod_and_use {
    ($($module:ident), +) => {
        $(
            pub mod $module;
            pub use self::$module::*;
        )+
    };
}

pub_mod_and_use!(coordinate, error, point, colour_point, advanced_point);
