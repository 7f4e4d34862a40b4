use quickcheck::{quickcheck, TestResult};

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::SeedableRng;

use seqview::{
    cartesian_product, generate, join_where, random, view, Cursor, RandomAccessCursor,
};

// Cartesian products grow multiplicatively, so the generated dimensions are
// clipped before multiplying.
const MAX_DIM: usize = 6;

#[test]
fn prop_product_matches_nested_loops() {
    fn p(a: Vec<i32>, b: Vec<i32>) -> bool {
        let a = &a[..a.len().min(MAX_DIM)];
        let b = &b[..b.len().min(MAX_DIM)];
        let mut expected = Vec::new();
        for y in b {
            for x in a {
                expected.push((x, y));
            }
        }
        cartesian_product((a, b)).to_vec() == expected
    }
    quickcheck(p as fn(Vec<i32>, Vec<i32>) -> bool)
}

#[test]
fn prop_product_len_counts_combinations() {
    fn p(a: Vec<i32>, b: Vec<i32>, c: Vec<i32>) -> bool {
        let a = &a[..a.len().min(MAX_DIM)];
        let b = &b[..b.len().min(MAX_DIM)];
        let c = &c[..c.len().min(MAX_DIM)];
        let product = cartesian_product((a, b, c));
        product.len() == a.len() * b.len() * c.len()
            && product.iter().count() == product.len()
    }
    quickcheck(p as fn(Vec<i32>, Vec<i32>, Vec<i32>) -> bool)
}

#[test]
fn prop_product_jump_equals_walk() {
    fn p(a: Vec<i32>, b: Vec<i32>) -> TestResult {
        let a = &a[..a.len().min(MAX_DIM)];
        let b = &b[..b.len().min(MAX_DIM)];
        let total = a.len() * b.len();
        if total == 0 {
            return TestResult::discard();
        }
        let (begin, end) = cartesian_product((a, b)).into_parts();
        let mut stepped = begin.clone();
        for offset in 0..=total {
            let mut jumped = begin.clone();
            jumped.advance(offset as isize);
            if jumped != stepped {
                return TestResult::failed();
            }
            if offset < total {
                stepped.step();
            }
        }
        TestResult::from_bool(stepped == end)
    }
    quickcheck(p as fn(Vec<i32>, Vec<i32>) -> TestResult)
}

#[test]
fn prop_product_jumps_round_trip() {
    fn p(a: Vec<i32>, b: Vec<i32>, start: usize, delta: isize) -> TestResult {
        let a = &a[..a.len().min(MAX_DIM)];
        let b = &b[..b.len().min(MAX_DIM)];
        let total = a.len() * b.len();
        if total == 0 {
            return TestResult::discard();
        }
        // clamp to landings between begin and end inclusive
        let start = start % (total + 1);
        let delta = delta.rem_euclid(total as isize + 1) - start as isize;
        let (begin, _) = cartesian_product((a, b)).into_parts();
        let mut from = begin;
        from.advance(start as isize);
        let mut cur = from.clone();
        cur.advance(delta);
        cur.advance(-delta);
        TestResult::from_bool(cur == from)
    }
    quickcheck(p as fn(Vec<i32>, Vec<i32>, usize, isize) -> TestResult)
}

#[test]
fn prop_product_reverses_cleanly() {
    fn p(a: Vec<i32>, b: Vec<i32>) -> bool {
        let a = &a[..a.len().min(MAX_DIM)];
        let b = &b[..b.len().min(MAX_DIM)];
        let forward: Vec<_> = cartesian_product((a, b)).iter().collect();
        let mut backward: Vec<_> = cartesian_product((a, b)).iter().rev().collect();
        backward.reverse();
        forward == backward
    }
    quickcheck(p as fn(Vec<i32>, Vec<i32>) -> bool)
}

#[test]
fn prop_join_finds_exactly_the_intersection() {
    fn p(mut a: Vec<u8>, mut b: Vec<u8>) -> bool {
        a.sort();
        a.dedup();
        b.sort();
        b.dedup();
        let expected: Vec<(u8, u8)> = a
            .iter()
            .filter(|k| b.binary_search(k).is_ok())
            .map(|k| (*k, *k))
            .collect();
        let joined = join_where(&a[..], &b[..], |x| *x, |y| *y, |x, y| (*x, *y));
        joined.to_vec() == expected
    }
    quickcheck(p as fn(Vec<u8>, Vec<u8>) -> bool)
}

#[test]
fn prop_except_keeps_the_complement() {
    fn p(a: Vec<i32>, b: Vec<i32>) -> bool {
        let expected: Vec<&i32> = a.iter().filter(|x| !b.contains(x)).collect();
        view(&a).except(&b).to_vec() == expected
    }
    quickcheck(p as fn(Vec<i32>, Vec<i32>) -> bool)
}

#[test]
fn prop_map_applies_in_order() {
    fn p(a: Vec<i32>) -> bool {
        let expected: Vec<i32> = a.iter().map(|x| x.wrapping_mul(3)).collect();
        view(&a).map(|x| x.wrapping_mul(3)).to_vec() == expected
    }
    quickcheck(p as fn(Vec<i32>) -> bool)
}

#[test]
fn prop_enumerate_counts_from_start() {
    fn p(a: Vec<i32>, start: u8) -> bool {
        let start = start as usize;
        let indexed = view(&a).enumerate_from(start).to_vec();
        indexed.len() == a.len()
            && indexed
                .iter()
                .enumerate()
                .all(|(i, &(n, v))| n == start + i && *v == a[i])
    }
    quickcheck(p as fn(Vec<i32>, u8) -> bool)
}

#[test]
fn prop_reverse_mirrors_forward() {
    fn p(a: Vec<i32>) -> bool {
        let mut backward: Vec<&i32> = view(&a).iter().rev().collect();
        backward.reverse();
        backward == view(&a).to_vec()
    }
    quickcheck(p as fn(Vec<i32>) -> bool)
}

#[test]
fn prop_walks_restart_from_the_beginning() {
    fn p(a: Vec<i32>) -> bool {
        let v = view(&a);
        v.to_vec() == v.to_vec()
    }
    quickcheck(p as fn(Vec<i32>) -> bool)
}

#[test]
fn prop_generate_yields_amount_values() {
    fn p(n: u8) -> bool {
        let amount = n as usize;
        let mut next = 0usize;
        let counted = generate(
            move || {
                let v = next;
                next += 1;
                v
            },
            amount,
        );
        let expected: Vec<usize> = (0..amount).collect();
        counted.len() == amount && counted.to_vec() == expected
    }
    quickcheck(p as fn(u8) -> bool)
}

#[test]
fn prop_random_is_deterministic_per_seed() {
    fn p(seed: u64, n: u8) -> bool {
        let amount = n as usize;
        let dice = Uniform::new_inclusive(0u32, 9);
        let first = random(dice, StdRng::seed_from_u64(seed), amount).to_vec();
        let second = random(dice, StdRng::seed_from_u64(seed), amount).to_vec();
        first.len() == amount && first == second
    }
    quickcheck(p as fn(u64, u8) -> bool)
}

// Adaptors compose: a forward-only join output can still feed a product.
#[test]
fn prop_join_output_multiplies() {
    fn p(mut a: Vec<u8>, mut b: Vec<u8>, tags: Vec<char>) -> bool {
        a.sort();
        a.dedup();
        a.truncate(MAX_DIM);
        b.sort();
        b.dedup();
        let tags = &tags[..tags.len().min(MAX_DIM)];
        let matched = join_where(&a[..], &b[..], |x| *x, |y| *y, |x, _| *x);
        let hits = matched.iter().count();
        let combos = cartesian_product((matched, tags));
        combos.iter().count() == hits * tags.len()
    }
    quickcheck(p as fn(Vec<u8>, Vec<u8>, Vec<char>) -> bool)
}
