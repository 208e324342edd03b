#![recursion_limit = "1024"]

use nuple::introspect::{Arity, Common, ElementAt};
use nuple::prelude::*;
use nuple::storage::{Cons, Empty, Flat2};
use static_assertions::assert_type_eq_all;

assert_type_eq_all!(ElementAt<Flat2<i32, f64>, 0>, i32);
assert_type_eq_all!(ElementAt<Flat2<i32, f64>, 1>, f64);
assert_type_eq_all!(Arity<Flat2<i32, f64>>, UnaryOf<2>);
assert_type_eq_all!(
    Common<Cons<&'static mut u8, Empty>, Cons<&'static u8, Empty>>,
    Cons<&'static u8, Empty>,
);

#[test]
fn arity_and_emptiness() {
    let t0: Tuple![] = tuple!();
    let t1: Tuple![u8] = Tuple::new((1,));
    let t2: Tuple![u8, u8] = Tuple::new((1, 2));
    let t3: Tuple![u8, i16, u32] = Tuple::new((1, 2, 3));
    let t5: Tuple![u8, u8, u8, u8, u8] = Tuple::new((1, 2, 3, 4, 5));
    let t6: Tuple![u8, i16, u32, i64, f32, f64] = Tuple::new((1, 2, 3, 4, 5.0, 6.0));
    let t7 = tuple!(1u8, 2i16, 3u32, 4i64, 5.0f32, 6.0f64, '7');

    assert_eq!(t0.len(), 0);
    assert!(t0.is_empty());
    assert_eq!(t1.len(), 1);
    assert!(!t1.is_empty());
    assert_eq!(t2.len(), 2);
    assert_eq!(t3.len(), 3);
    assert_eq!(t5.len(), 5);
    assert_eq!(t6.len(), 6);
    assert_eq!(t7.len(), 7);

    assert_eq!(<Tuple![u8, u8]>::LEN, 2);
    assert_eq!(<Tuple![]>::LEN, 0);
}

#[test]
fn accessors_across_layouts() {
    let mut flat: Tuple![i32, f64] = Tuple::new((1, 2.5));
    assert_eq!(*flat.at::<0>(), 1);
    *flat.at_mut::<1>() = 3.5;
    assert_eq!(flat.into_at::<1>(), 3.5);

    let packed: Tuple![i32, i32, i32, i32] = Tuple::new((1, 2, 3, 4));
    assert_eq!(*packed.at::<3>(), 4);
    assert_eq!(packed.into_at::<0>(), 1);

    let chain = tuple!(1u8, "two", 3.0f32, 'x', 5i64, 6u16, 7i8);
    assert_eq!(*chain.at::<1>(), "two");
    assert_eq!(*chain.at::<6>(), 7i8);

    let empty: Tuple![] = tuple!();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
}

#[test]
fn round_trip_through_elements() {
    let packed: Tuple![u8, u8, u8] = Tuple::new((1, 2, 3));
    assert_eq!(packed.into_elements(), (1, 2, 3));

    let flat: Tuple![u8, char] = Tuple::new((7, 'x'));
    assert_eq!(flat.into_elements(), (7, 'x'));

    let chain = tuple!(1, 2.0, "three");
    assert_eq!(chain.into_elements(), (1, 2.0, "three"));

    let empty: Tuple![] = Tuple::new(());
    assert_eq!(empty.into_elements(), ());
}

#[test]
fn equality_ignores_layout() {
    let packed: Tuple![i32, i32] = Tuple::new((1, 2));
    let chain = tuple!(1, 2);
    assert_eq!(packed, chain);
    assert_eq!(chain, packed);
    assert_ne!(packed, tuple!(1, 3));

    let flat: Tuple![i32, i64] = Tuple::new((1, 2));
    assert_eq!(flat, tuple!(1i32, 2i64));

    let empty_a: Tuple![] = tuple!();
    let empty_b: Tuple![] = tuple!();
    assert_eq!(empty_a, empty_b);
}

#[test]
fn ordering_is_a_fold_over_positions() {
    let a: Tuple![i32, i32] = Tuple::new((1, 3));
    let b: Tuple![i32, i32] = Tuple::new((1, 5));
    assert!(a < b);
    assert!(!(b < a));
    assert!(b > a);
    assert!(a <= b);
    assert!(!(b <= a));

    // A greater lead position dominates a lesser trailing one.
    let c: Tuple![i32, i32] = Tuple::new((2, 0));
    assert!(!(c < b));
    assert!(b < c);

    let d: Tuple![i32, i32] = Tuple::new((1, 5));
    assert!(!(b < d));
    assert!(b <= d);
    assert!(b >= d);
    assert_eq!(b.partial_cmp(&d), Some(std::cmp::Ordering::Equal));

    // Ordering works across layouts too.
    assert!(a < tuple!(1, 4));
}

#[test]
fn incomparable_elements_yield_no_ordering() {
    let x: Tuple![f64, f64] = Tuple::new((f64::NAN, 1.0));
    let y: Tuple![f64, f64] = Tuple::new((0.0, 1.0));
    assert_eq!(x.partial_cmp(&y), None);
    assert!(!(x < y));
    assert!(!(x > y));
}

#[test]
fn native_tuple_comparisons() {
    let t: Tuple![i32, i32] = Tuple::new((1, 2));
    assert_eq!(t, (1, 2));
    assert!(t < (1, 3));
    assert!(t >= (1, 2));

    let empty: Tuple![] = tuple!();
    assert_eq!(empty, ());
}

#[test]
fn extraction() {
    let t: Tuple![i32, i32, i32, i32, i32] = Tuple::new((0, 1, 2, 3, 4));
    assert_eq!(t.extract::<1, 4>(), tuple!(1, 2, 3));
    assert_eq!(t.extract::<0, 0>(), tuple!());
    assert_eq!(t.extract_from::<3>(), tuple!(3, 4));
    assert_eq!(t.extract_from::<5>(), tuple!());

    let (front, back) = t.split::<2>();
    assert_eq!(front, tuple!(0, 1));
    assert_eq!(back, tuple!(2, 3, 4));

    let (none, all) = t.split::<0>();
    assert_eq!(none, tuple!());
    assert_eq!(all, tuple!(0, 1, 2, 3, 4));

    let (everything, nothing) = t.split::<5>();
    assert_eq!(everything, tuple!(0, 1, 2, 3, 4));
    assert_eq!(nothing, tuple!());
}

#[test]
fn splitting_at_every_index() {
    let t: Tuple![i32, i32, i32, i32, i32] = Tuple::new((0, 1, 2, 3, 4));

    let (front, back) = t.split::<0>();
    assert_eq!(front, tuple!());
    assert_eq!(back, tuple!(0, 1, 2, 3, 4));

    let (front, back) = t.split::<1>();
    assert_eq!(front, tuple!(0));
    assert_eq!(back, tuple!(1, 2, 3, 4));

    let (front, back) = t.split::<2>();
    assert_eq!(front, tuple!(0, 1));
    assert_eq!(back, tuple!(2, 3, 4));

    let (front, back) = t.split::<3>();
    assert_eq!(front, tuple!(0, 1, 2));
    assert_eq!(back, tuple!(3, 4));

    let (front, back) = t.split::<4>();
    assert_eq!(front, tuple!(0, 1, 2, 3));
    assert_eq!(back, tuple!(4));

    let (front, back) = t.split::<5>();
    assert_eq!(front, tuple!(0, 1, 2, 3, 4));
    assert_eq!(back, tuple!());
}

#[test]
fn reference_element_round_trip() {
    let (mut a, mut b) = (1i64, 2i64);
    {
        let handles = tie!(a, b);
        assert_eq!(handles.len(), 2);
        let (x, y) = handles.into_elements();
        *x += 10;
        *y += 20;
    }
    assert_eq!((a, b), (11, 22));

    let shared = tuple!(&a, &b);
    assert_eq!(*shared.at::<0>(), &11);
    assert_eq!(shared, tuple!(&11i64, &22i64));
    assert_eq!(shared.to_string(), "( 11 22 )");
}

#[test]
fn layout_transparency() {
    // Same arity, one packed and one flat: identical behavior under every operation.
    let hom: Tuple![i32, i32, i32, i32] = Tuple::new((1, 2, 3, 4));
    let het: Tuple![i32, i64, f64, u8] = Tuple::new((1, 2, 3.0, 4));

    assert_eq!(*hom.at::<2>(), 3);
    assert_eq!(*het.at::<2>(), 3.0);
    assert_eq!(hom.to_string(), "( 1 2 3 4 )");
    assert_eq!(het.to_string(), "( 1 2 3 4 )");

    assert_eq!(hom, tuple!(1, 2, 3, 4));
    assert!(hom < tuple!(1, 2, 3, 5));
    assert_eq!(het, tuple!(1i32, 2i64, 3.0f64, 4u8));
    assert!(het < tuple!(1i32, 2i64, 3.5f64, 0u8));
}

#[test]
fn casting() {
    let t: Tuple![i32, f64] = Tuple::new((3, 2.5));

    let u: Tuple![i64, f32] = t.cast();
    assert_eq!(u, tuple!(3i64, 2.5f32));

    // Float-to-int conversion truncates, with `as` semantics.
    let w: Tuple![u32, i64] = t.cast();
    assert_eq!(w, tuple!(3u32, 2i64));

    // The target may land in a different layout than the source.
    let p: Tuple![i64, i64] = t.cast();
    assert_eq!(p, tuple!(3i64, 2i64));
}

#[test]
fn assignment() {
    let mut t: Tuple![i64, i64] = Tuple::new((0i64, 0i64));
    t.set_from(tuple!(1i32, 2i16));
    assert_eq!(t, tuple!(1i64, 2i64));

    let (mut a, mut b) = (0i64, 0.0f64);
    tie!(a, b).assign(tuple!(5i32, 1.5f32));
    assert_eq!(a, 5);
    assert_eq!(b, 1.5);
}

#[test]
fn rendering() {
    assert_eq!(tuple!(1, 2, 3).to_string(), "( 1 2 3 )");

    let empty: Tuple![] = tuple!();
    assert_eq!(empty.to_string(), "( )");

    let packed: Tuple![u8, u8] = Tuple::new((1, 2));
    assert_eq!(packed.to_string(), "( 1 2 )");

    assert_eq!(format!("{:?}", tuple!(1, "two")), r#"( 1 "two" )"#);
}

#[test]
fn invocation() {
    let t: Tuple![i32, i32, i32] = Tuple::new((1, 2, 3));
    assert_eq!(t.call(|a, b, c| a + b + c), 6);

    let s = apply(|n: u8, s: &str| format!("{}{}", n, s), tuple!(1u8, "x"));
    assert_eq!(s, "1x");

    let unit: Tuple![] = tuple!();
    assert_eq!(unit.call(|| 42), 42);

    // Invocation under each value category.
    let owned: Tuple![String, String] = Tuple::new(("a".into(), "b".into()));
    let joined = owned.as_refs().call(|a: &String, b: &String| format!("{}{}", a, b));
    assert_eq!(joined, "ab");
    assert_eq!(*owned.at::<0>(), "a");

    let mut counted: Tuple![i32, i32] = Tuple::new((1, 2));
    counted.as_muts().call(|a: &mut i32, b: &mut i32| {
        *a += 10;
        *b += 10;
    });
    assert_eq!(counted, tuple!(11, 12));
}

#[test]
fn construction_from_native_tuples() {
    let t: nuple::Tuple<_> = (1, 2.5).into();
    assert_eq!(t, tuple!(1, 2.5));

    let chained = make_tuple((1u8, 'x'));
    assert_eq!(chained, tuple!(1u8, 'x'));
}

struct Concat(String);

impl Visit<i32> for Concat {
    fn visit(&mut self, n: &i32) {
        self.0.push_str(&n.to_string());
    }
}

impl Visit<&'static str> for Concat {
    fn visit(&mut self, s: &&'static str) {
        self.0.push_str(s);
    }
}

#[test]
fn visiting() {
    let t = tuple!(1, "a", 2);
    let mut v = Concat(String::new());
    for_each(&mut v, &t);
    assert_eq!(v.0, "1a2");
}

struct Double;

impl VisitMut<i32> for Double {
    fn visit_mut(&mut self, n: &mut i32) {
        *n *= 2;
    }
}

impl VisitMut<f64> for Double {
    fn visit_mut(&mut self, x: &mut f64) {
        *x *= 2.0;
    }
}

#[test]
fn visiting_mut() {
    let mut t: Tuple![i32, f64] = Tuple::new((2, 1.5));
    for_each_mut(&mut Double, &mut t);
    assert_eq!(t, tuple!(4, 3.0));
}

#[test]
fn reference_views() {
    let t: Tuple![i32, f64] = Tuple::new((1, 2.5));
    let refs = t.as_refs();
    assert_eq!(**refs.at::<0>(), 1);

    let mut u: Tuple![i32, i32, i32] = Tuple::new((1, 2, 3));
    u.as_muts().assign(tuple!(7, 8, 9));
    assert_eq!(u, tuple!(7, 8, 9));
}

#[test]
fn derived_conveniences() {
    let t: Tuple![i32, i32] = Default::default();
    assert_eq!(t, tuple!(0, 0));

    let copied = t;
    assert_eq!(copied, t);
}
