use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::*;
use crate::bounds::{Bound, BoxBounds};
use crate::error::BoxError;
use crate::testing::{arb_box, bx, Screen};

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

#[test]
fn inverted_axes_rejected() {
    assert!(matches!(
        Box2::<Screen>::of(0, -1, 0, 0),
        Err(BoxError::InvariantViolation { .. })
    ));
    assert!(matches!(
        Box2::<Screen>::of(0, 0, 0, -1),
        Err(BoxError::InvariantViolation { .. })
    ));
}

#[test]
fn unrepresentable_extent_rejected() {
    assert_eq!(
        Box2::<Screen>::of(i32::MIN, i32::MAX, 0, 0),
        Err(BoxError::ArithmeticOverflow { op: "sub" })
    );
}

#[test]
fn zero_box_has_zero_size() {
    let b = bx(0, 0, 0, 0);
    assert_eq!(b.width(), 0);
    assert_eq!(b.height(), 0);
}

#[test]
fn identities() {
    let b0 = bx(0, 2, 4, 6);
    assert_eq!(b0.minimum_x(), 0);
    assert_eq!(b0.maximum_x(), 2);
    assert_eq!(b0.minimum_y(), 4);
    assert_eq!(b0.maximum_y(), 6);
    assert_eq!(Box2::copy_of(&b0), Ok(b0));

    assert_eq!(b0.with_minimum_x(-1).unwrap().minimum_x(), -1);
    assert_eq!(b0.with_minimum_y(-1).unwrap().minimum_y(), -1);
    assert_eq!(b0.with_maximum_x(10).unwrap().maximum_x(), 10);
    assert_eq!(b0.with_maximum_y(10).unwrap().maximum_y(), 10);
    assert_eq!(b0.with_maximum_x(b0.maximum_x()), Ok(b0));
    assert_eq!(b0.with_minimum_y(b0.minimum_y()), Ok(b0));

    assert_eq!(Box2::builder().from(&b0).build(), Ok(b0));
}

#[test]
fn with_revalidates_its_axis() {
    let b0 = bx(0, 2, 4, 6);
    assert!(b0.with_minimum_x(3).is_err());
    assert!(b0.with_maximum_x(-1).is_err());
    assert!(b0.with_minimum_y(7).is_err());
    assert!(b0.with_maximum_y(3).is_err());
}

#[test]
fn display_is_show() {
    let b0 = bx(0, 2, 4, 6);
    assert_eq!(b0.to_string(), "2x2 0+4");
    assert_ne!(b0.to_string(), b0.with_maximum_x(3).unwrap().to_string());
    assert_ne!(b0.to_string(), b0.with_minimum_y(3).unwrap().to_string());
}

#[test]
fn builder_reports_first_missing_bound() {
    let mut b = Box2Builder::<Screen>::new();
    assert_eq!(b.build(), Err(BoxError::IllegalState { bound: Bound::MinimumX }));
    b.set_maximum_x(1).set_maximum_y(2);
    assert_eq!(b.build(), Err(BoxError::IllegalState { bound: Bound::MinimumX }));
    b.set_minimum_x(0);
    assert_eq!(b.build(), Err(BoxError::IllegalState { bound: Bound::MinimumY }));

    let mut c = Box2Builder::<Screen>::new();
    c.set_minimum_x(0).set_minimum_y(0).set_maximum_y(2);
    assert_eq!(c.build(), Err(BoxError::IllegalState { bound: Bound::MaximumX }));

    let mut d = Box2Builder::<Screen>::new();
    d.set_minimum_x(0).set_minimum_y(0).set_maximum_x(1);
    assert_eq!(d.build(), Err(BoxError::IllegalState { bound: Bound::MaximumY }));
}

#[test]
fn builder_builds_and_validates() {
    let mut b = Box2::<Screen>::builder();
    b.set_minimum_x(0).set_minimum_y(0).set_maximum_x(1).set_maximum_y(2);
    assert_eq!(b.build(), Ok(bx(0, 1, 0, 2)));
    b.set_maximum_x(-1);
    assert!(matches!(b.build(), Err(BoxError::InvariantViolation { .. })));
}

#[test]
fn mutable_copies_into_equal_immutable() {
    let m = Box2Mut::<Screen>::from_bounds(0, 2, 4, 6);
    assert_eq!(m.to_immutable(), Ok(bx(0, 2, 4, 6)));
    assert_eq!(Box2::copy_of(&m.to_immutable().unwrap()), Ok(bx(0, 2, 4, 6)));
}

#[test]
fn mutable_identities() {
    let b0 = Box2Mut::<Screen>::from_bounds(0, 2, 4, 6);
    assert_eq!(b0.minimum_x(), Ok(0));
    assert_eq!(b0.maximum_x(), Ok(2));
    assert_eq!(b0.minimum_y(), Ok(4));
    assert_eq!(b0.maximum_y(), Ok(6));

    let mut b1 = Box2Mut::new();
    b1.copy_from(&b0.to_immutable().unwrap());
    assert_eq!(b0, b1);
    assert_eq!(hash_of(&b0), hash_of(&b1));
    assert_eq!(format!("{b0:?}"), format!("{b1:?}"));
    assert_eq!(b0.to_immutable(), b1.to_immutable());

    b1.set_maximum_x(3);
    assert_ne!(b0, b1);
    assert_ne!(format!("{b0:?}"), format!("{b1:?}"));
}

#[test]
fn mutable_unset_reads_fail() {
    let b = Box2Mut::<Screen>::new();
    assert_eq!(b.minimum_x(), Err(BoxError::IllegalState { bound: Bound::MinimumX }));
    assert_eq!(b.maximum_x(), Err(BoxError::IllegalState { bound: Bound::MaximumX }));
    assert_eq!(b.minimum_y(), Err(BoxError::IllegalState { bound: Bound::MinimumY }));
    assert_eq!(b.maximum_y(), Err(BoxError::IllegalState { bound: Bound::MaximumY }));
    assert!(matches!(b.to_immutable(), Err(BoxError::IllegalState { .. })));
}

#[test]
fn mutable_lifecycle() {
    let mut b = Box2Mut::<Screen>::new();
    assert!(!b.is_initialized());
    b.set_minimum_x(5).set_maximum_x(1);
    assert!(!b.is_initialized());
    b.set_minimum_y(0).set_maximum_y(0);
    assert!(b.is_initialized());
    // Inconsistent while assembling; only the explicit checks complain.
    assert!(matches!(
        b.check_preconditions(),
        Err(BoxError::InvariantViolation { .. })
    ));
    assert!(matches!(b.to_immutable(), Err(BoxError::InvariantViolation { .. })));
    b.set_maximum_x(9);
    assert_eq!(b.check_preconditions(), Ok(()));
    assert_eq!(b.to_immutable(), Ok(bx(5, 9, 0, 0)));

    let reference = b.clone();
    b.clear();
    assert!(!b.is_initialized());
    assert_ne!(b, reference);
    assert_eq!(b, Box2Mut::default());
}

#[test]
fn mutable_negative_extents_fail_checks() {
    assert!(Box2Mut::<Screen>::from_bounds(0, -1, 0, 0)
        .check_preconditions()
        .is_err());
    assert!(Box2Mut::<Screen>::from_bounds(0, 0, 0, -1)
        .check_preconditions()
        .is_err());
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn box_is_send_sync_for_any_tag() {
    // Tags need not be Send/Sync themselves.
    assert_send_sync::<Box2<std::rc::Rc<()>>>();
}

proptest! {
    #[test]
    fn construction_is_idempotent(b in arb_box()) {
        let again = Box2::of(b.minimum_x(), b.maximum_x(), b.minimum_y(), b.maximum_y()).unwrap();
        prop_assert_eq!(again, b);
        prop_assert_eq!(hash_of(&again), hash_of(&b));
        prop_assert_eq!(again.to_string(), b.to_string());
    }

    #[test]
    fn mutable_round_trip(b in arb_box()) {
        let mut m = Box2Mut::new();
        m.copy_from(&b);
        prop_assert!(m.is_initialized());
        prop_assert_eq!(m.to_immutable().unwrap(), b);
    }
}
