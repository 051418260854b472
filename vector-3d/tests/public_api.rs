use float_cmp::assert_approx_eq;
use vector_3d::{scalar_product, vector_product, Error, ErrorKind, Operation, Vector3D};

#[test]
fn accessors_return_exact_components() {
    for (x, y, z) in [
        (1.0, 2.0, 3.0),
        (-0.1, 1e-300, 1e300),
        (f64::MAX, f64::MIN, f64::MIN_POSITIVE),
    ] {
        let v = Vector3D::new(x, y, z).unwrap();
        assert_eq!(v.x().to_bits(), x.to_bits());
        assert_eq!(v.y().to_bits(), y.to_bits());
        assert_eq!(v.z().to_bits(), z.to_bits());
    }
}

#[test]
fn errors_are_distinguishable_by_kind() {
    let invalid = Vector3D::try_from(vec![1.0, 2.0]).unwrap_err();
    assert_eq!(invalid.kind(), ErrorKind::InvalidArgument);

    let max = Vector3D::new(f64::MAX, f64::MAX, f64::MAX).unwrap();
    let overflow = (max * 10.0).unwrap_err();
    assert_eq!(overflow, Error::Overflow(Operation::Multiplication));
    assert_eq!(overflow.kind(), ErrorKind::Overflow);
}

#[test]
fn operators_compose_with_question_mark() -> Result<(), Error> {
    let a = Vector3D::new(1.0, 2.0, 2.0)?;
    let b = Vector3D::new(3.0, 4.0, 0.0)?;

    let scaled = ((a + b)? * 0.5)?;
    assert_eq!(scaled, Vector3D::new(2.0, 3.0, 1.0)?);

    assert_approx_eq!(f64, a.length()?, 3.0);
    assert_approx_eq!(f64, b.length()?, 5.0);
    Ok(())
}

#[test]
fn products() -> Result<(), Error> {
    let a = Vector3D::new(1.0, 2.0, 3.0)?;

    assert_approx_eq!(
        f64,
        scalar_product(&a, &Vector3D::new(8.0, 5.0, 6.0)?)?,
        6.0
    );

    let cross = vector_product(&a, &Vector3D::new(4.0, 5.0, 6.0)?)?;
    assert_eq!(<[f64; 3]>::from(cross), [-3.0, 6.0, -3.0]);
    assert_eq!(vector_product(&a, &a)?, Vector3D::ZERO);
    Ok(())
}

#[test]
fn shared_across_threads() {
    let v = Vector3D::new(1.0, 2.0, 3.0).unwrap();
    let handles: Vec<_> = (1..=4)
        .map(|k| std::thread::spawn(move || (v * f64::from(k)).unwrap()))
        .collect();
    for (k, handle) in (1..=4).zip(handles) {
        let scaled = handle.join().unwrap();
        assert_eq!(scaled, (v * f64::from(k)).unwrap());
    }
}
