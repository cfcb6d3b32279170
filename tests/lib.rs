//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/.

use mcfft::{
    assert_nearly_eq, reconstruct, transform_axis, Array, Direction, Extents, McfftError, MdIndex,
    Scalar, Schedule, Transform,
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

fn rng() -> XorShiftRng {
    XorShiftRng::from_seed([
        0xDA, 0xE1, 0x4B, 0x0B, 0xFF, 0xC2, 0xFE, 0x64, 0x23, 0xFE, 0x3F, 0x51, 0x6D, 0x3E, 0xA2,
        0xF3,
    ])
}

fn random_scalar<R: Rng>(rng: &mut R, depth: usize) -> Scalar<f64> {
    Scalar::from_coeffs((0..1 << depth).map(|_| rng.gen::<f64>() - 0.5).collect()).unwrap()
}

#[test]
fn pack_round_trips_both_orders() {
    let ext = Extents::new(&[3, 4, 5]).unwrap();
    for offset in 0..ext.count() {
        let mut idx = MdIndex::new(&ext);
        idx.unpack_right(offset);
        assert_eq!(idx.pack_right(), offset);
        idx.unpack_left(offset);
        assert_eq!(idx.pack_left(), offset);
    }
}

#[test]
fn traversal_visits_every_index_exactly_once() {
    let ext = Extents::new(&[2, 3, 4]).unwrap();
    let mut seen = vec![0usize; ext.count()];
    let mut idx = MdIndex::new(&ext);
    let mut steps = 0;
    loop {
        seen[idx.pack_right()] += 1;
        steps += 1;
        let more = idx.incr();
        if !more {
            assert_eq!(idx.coords(), &[0, 0, 0]);
            break;
        }
    }
    assert_eq!(steps, ext.count());
    assert!(seen.iter().all(|&c| c == 1));
}

#[test]
fn scheduled_extraction_and_insertion() {
    let sched = Schedule::from_points(5, &[0, 2]).unwrap();
    let ext = Extents::new(&[5]).unwrap();
    let dense = Array::from_slice(&ext, &[1, 9, 3, 9, 9]).unwrap();

    let sparse = dense.extract(&sched).unwrap();
    assert_eq!(sparse.data(), &[1, 3]);

    let back = sparse.insert_into(&sched).unwrap();
    assert_eq!(back.data(), &[1, 0, 3, 0, 0]);

    // insert then extract is the identity on sparse vectors.
    assert_eq!(back.extract(&sched).unwrap(), sparse);

    // extract then insert equals masking.
    let mut masked = dense.clone();
    masked *= &sched;
    assert_eq!(&(&dense % &sched) % &sched, masked);
}

#[test]
fn scalar_algebra_across_depths() {
    let mut rng = rng();
    for depth in 0..3 {
        for _ in 0..25 {
            let x = random_scalar(&mut rng, depth);

            let unit = Scalar::<f64>::unit_real(depth);
            let p = &x * &x.inverse();
            assert_nearly_eq!(p, unit, 1e-8);

            assert_eq!(x.conj().conj(), x);
            assert!(x.squared_norm() >= 0.0);
        }
    }
}

#[test]
fn forward_of_constant_ones() {
    let n = 4;
    let plan = Transform::<f64>::forward(n, 1).unwrap();
    let mut x = vec![Scalar::from_coeffs(vec![1.0, 0.0]).unwrap(); n];
    plan.apply(&mut x, 0);
    assert_nearly_eq!(x[0].coeff(0), 4.0);
    assert_nearly_eq!(x[0].coeff(1), 0.0);
    for v in &x[1..] {
        assert_nearly_eq!(v.coeff(0), 0.0);
        assert_nearly_eq!(v.coeff(1), 0.0);
    }
}

#[test]
fn round_trips_over_smooth_lengths() {
    let mut rng = rng();
    let smooth: Vec<usize> = (2..=64)
        .filter(|&n| {
            let mut m = n;
            for f in [2, 3, 5].iter() {
                while m % f == 0 {
                    m /= f;
                }
            }
            m == 1
        })
        .collect();

    for &depth in &[1usize, 2] {
        for &n in &smooth {
            let x: Vec<Scalar<f64>> = (0..n).map(|_| random_scalar(&mut rng, depth)).collect();
            let mut y = x.clone();
            Transform::forward(n, depth).unwrap().apply(&mut y, 0);
            Transform::inverse(n, depth).unwrap().apply(&mut y, 0);
            for (a, b) in y.iter().zip(&x) {
                let scaled =
                    Scalar::from_coeffs(a.coeffs().iter().map(|c| c / n as f64).collect())
                        .unwrap();
                assert_nearly_eq!(scaled, *b, 1e-8);
            }
        }
    }
}

#[test]
fn non_smooth_lengths_fail_at_construction() {
    for &n in &[7usize, 11, 13, 14, 21, 49] {
        assert!(matches!(
            Transform::<f64>::forward(n, 1),
            Err(McfftError::NotSmooth(_))
        ));
    }
}

#[test]
fn depth_zero_buffers_cannot_be_transformed() {
    assert_eq!(
        Transform::<f64>::forward(8, 0).err(),
        Some(McfftError::DepthTooShallow(0, 1))
    );
}

#[test]
fn two_dimensional_round_trip() {
    let mut rng = rng();
    let ext = Extents::new(&[6, 10]).unwrap();
    let x = Array::from_fn(&ext, |_| random_scalar(&mut rng, 2));

    let mut y = x.clone();
    transform_axis(&mut y, 0, Direction::Forward).unwrap();
    transform_axis(&mut y, 1, Direction::Forward).unwrap();
    transform_axis(&mut y, 0, Direction::Inverse).unwrap();
    transform_axis(&mut y, 1, Direction::Inverse).unwrap();

    let scale = ext.count() as f64;
    for (a, b) in y.data().iter().zip(x.data()) {
        let scaled = Scalar::from_coeffs(a.coeffs().iter().map(|c| c / scale).collect()).unwrap();
        assert_nearly_eq!(scaled, *b, 1e-8);
    }
}

#[test]
fn integer_expression_scenario() {
    let ext = Extents::new(&[3]).unwrap();
    let x = Array::from_slice(&ext, &[1, 2, 3]).unwrap();
    let y = Array::from_slice(&ext, &[4, 5, 6]).unwrap();
    let z = Array::from_slice(&ext, &[7, 8, 9]).unwrap();
    let w = &x + &(&(&y * &(-&z)) / 2);
    assert_eq!(w.data(), &[-13, -18, -24]);
}

#[test]
fn reconstruction_recovers_a_tone() {
    let n = 32;
    let freq = 5;
    let points: Vec<usize> = vec![0, 1, 2, 3, 4, 5, 6, 7, 9, 11, 14, 17, 21, 26];
    let sched = Schedule::from_points(n, &points).unwrap();

    let ext = Extents::new(&[points.len()]).unwrap();
    let y = Array::from_vec(
        &ext,
        points
            .iter()
            .map(|&p| Scalar::expi(1, 1, 2 * ((p * freq) % n), n))
            .collect(),
    )
    .unwrap();

    let spec = reconstruct(&y, &sched, 300, 0.95).unwrap();
    let peak = (0..n)
        .max_by(|&a, &b| spec[a].norm().partial_cmp(&spec[b].norm()).unwrap())
        .unwrap();
    assert_eq!(peak, freq);
}
