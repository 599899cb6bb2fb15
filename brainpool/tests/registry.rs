//! Registry statics under concurrent first use.

use std::{sync::Barrier, thread};
use weierstrass::Curve;

const THREADS: usize = 8;

#[test]
fn concurrent_first_use_yields_one_curve() {
    let barrier = Barrier::new(THREADS);

    let curves: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    brainpool::p224r1()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for curve in &curves {
        assert!(core::ptr::eq(*curve, curves[0]));
        assert!(core::ptr::eq(*curve.twisted(), brainpool::p224t1()));

        let (gx, gy) = curve.params().generator();
        assert!(curve.is_on_curve(gx, gy));
    }
}

#[test]
fn accessors_return_the_same_static() {
    assert!(core::ptr::eq(brainpool::p256r1(), brainpool::p256r1()));
    assert!(core::ptr::eq(brainpool::p256t1(), brainpool::p256t1()));
    assert!(core::ptr::eq(*brainpool::p256r1().twisted(), brainpool::p256t1()));
}
