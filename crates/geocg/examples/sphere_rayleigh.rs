//! Rayleigh quotient minimization on the unit sphere.
//!
//! Minimizing f(x) = xᵀAx over S^{n-1} finds the eigenvector of A with the
//! smallest eigenvalue. Run with:
//!
//! ```bash
//! cargo run --example sphere_rayleigh
//! ```

use geocg::prelude::*;

fn main() {
    // A = diag(1, 2, ..., 5); the answer is the first basis vector.
    let dim = 5;
    let eigenvalues: Vec<f64> = (1..=dim).map(|i| i as f64).collect();

    let sphere = Sphere::new(dim).expect("valid ambient dimension");

    let ev = eigenvalues.clone();
    let cost = move |x: &DVector<f64>| {
        x.iter().zip(ev.iter()).map(|(xi, ai)| ai * xi * xi).sum::<f64>()
    };

    let ev = eigenvalues;
    let sphere_for_grad = sphere.clone();
    let gradient = move |x: &DVector<f64>| {
        let euclidean =
            DVector::from_iterator(x.len(), x.iter().zip(ev.iter()).map(|(xi, ai)| 2.0 * ai * xi));
        sphere_for_grad.euclidean_to_riemannian_gradient(x, &euclidean)
    };

    let initial = sphere.project_point(&DVector::from_element(dim, 1.0));
    let mut cg = ConjugateGradient::new(
        sphere.metric(),
        sphere.geodesic::<f64>(),
        SecantLineSearch::new(),
    )
    .with_max_steps(500);

    println!("optimizer: {}", cg.name());
    println!("initial cost: {:.6}", cost(&initial));

    let minimum = cg.optimize(initial, &cost, &gradient);

    println!("final cost:   {:.6}", cost(&minimum));
    println!("minimizer:    {:.4}", minimum.transpose());
    println!("(smallest eigenvalue is 1, eigenvector ±e₁)");
}
