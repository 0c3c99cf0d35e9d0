//! Matrix and vector algebra benchmarks.

use divan::Bencher;
use divan::black_box;
use divan::counter::ItemsCount;
use ponymath_core::math::{Mat3x3, Mat4x4, Vec3, mat3, mat4, vec3};

fn mat4_input() -> Mat4x4<f32> {
    mat4(
        1.0, 3.0, 2.0, 1.0, //
        0.0, 0.0, 1.0, 0.0, //
        2.0, 0.0, 4.0, 5.0, //
        -1.0, 5.0, -3.0, 0.0,
    )
}

#[divan::bench(types = [i32, i64, f32, f64])]
fn determinant_3x3<T>(b: Bencher)
where
    T: ponymath_core::math::Signed + From<i8>,
{
    let m: Mat3x3<T> =
        mat3(10, -15, 3, 5, -20, 33, 6, 7, 19).map(|x: i8| T::from(x));

    b.counter(ItemsCount::new(1u32))
        .bench_local(|| black_box(&m).determinant());
}

#[divan::bench]
fn determinant_4x4(b: Bencher) {
    let m = mat4_input();
    b.counter(ItemsCount::new(1u32))
        .bench_local(|| black_box(&m).determinant());
}

#[divan::bench]
fn inverse_4x4(b: Bencher) {
    let m = mat4_input();
    b.counter(ItemsCount::new(1u32))
        .bench_local(|| black_box(&m).inverse());
}

#[divan::bench]
fn product_4x4(b: Bencher) {
    let (m, n) = (mat4_input(), Mat4x4::<f32>::IDENTITY * 2.0);
    b.counter(ItemsCount::new(1u32))
        .bench_local(|| black_box(m) * black_box(n));
}

#[divan::bench]
fn normalize(b: Bencher) {
    let v: Vec3 = vec3(-1e6, 3.5, 2e3);
    b.counter(ItemsCount::new(1u32))
        .bench_local(|| black_box(v).normalized());
}

fn main() {
    divan::main()
}
