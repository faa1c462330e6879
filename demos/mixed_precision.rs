use anyhow::Result;
use log::{info, LevelFilter};

use redeem_ndarray::{ArrayConfig, ElementKind, NDArray};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("NDARRAY_LOG", "info"))
        .init();

    let mut a = NDArray::<f64>::from_elem(&[2, 2, 2], 1.0f64);
    let b = NDArray::<f32>::from_elem(&[2, 2, 2], 2.0f32);

    a.try_add_assign(&b)?;
    let c = a.try_add(&b)?;

    for index in c.indices() {
        info!("a{:?} = {}, c{:?} = {}", index, a[&index[..]], index, c[&index[..]]);
    }

    let mismatched = NDArray::<f32>::from_shape(&[2, 4]);
    if let Err(err) = a.try_sub_assign(&mismatched) {
        info!("rejected as expected: {}", err);
    }

    let kind: ElementKind = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "f32".to_string())
        .parse()?;
    let mut runtime = ArrayConfig::new(vec![2, 2], kind).with_fill(0.5).build();
    let other = ArrayConfig::new(vec![2, 2], ElementKind::F64).with_fill(0.25).build();
    runtime.try_sub_assign(&other)?;
    info!(
        "{} array after subtracting an f64 array: {}",
        runtime.kind(),
        runtime.get(&[1, 1])?
    );

    Ok(())
}
