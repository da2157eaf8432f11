// Factorizes a few matrices and prints the results.
// Run with RUST_LOG=warn to see the Cholesky degenerate-pivot diagnostics:
//   RUST_LOG=warn cargo run --example factorize

use densela::linalg::LinalgError;
use densela::Matrix;

fn main() -> Result<(), LinalgError> {
    env_logger::init();

    let a = Matrix::new([[4.0_f64, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]]);
    println!("A =\n{a}\n");

    let chol = a.cholesky()?;
    println!("Cholesky U (A = Uᵗ U) =\n{}\n", chol.u());

    let lu = a.clone().lu()?;
    println!("L =\n{}\n", lu.l());
    println!("U =\n{}\n", lu.u());
    println!("det(A) = {}\n", lu.det());

    let inv = a.clone().inverse()?;
    println!("A⁻¹ =\n{}\n", inv.map(|x| (x * 1e6).round() / 1e6));
    println!("A A⁻¹ (rounded) =\n{}\n", (&a * &inv).round());

    // Positive semi-definite: the second pivot reduces to zero.
    let psd = Matrix::new([[1.0_f64, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 2.0]]);
    let chol = psd.cholesky()?;
    println!("semi-definite U =\n{}", chol.u());
    println!("entries left at zero: {:?}\n", chol.degenerate());

    match Matrix::new([[0.0_f64, 1.0], [1.0, 0.0]]).inverse() {
        Ok(inv) => println!("unexpected inverse:\n{inv}"),
        Err(e) => println!("no pivoting: {e}"),
    }

    Ok(())
}
