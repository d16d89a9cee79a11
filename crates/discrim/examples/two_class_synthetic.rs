use discrim::feature_selection::univariate_selection::rank_all_methods;
use discrim::{ScoringMethod, SelectKBest};
use ndarray::Array2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Tiny synthetic dataset: 8 samples (4 per class), 4 features
    // feature 0 separates the classes, 1 is noise, 2 is constant, 3 is weakly shifted
    let x = Array2::from_shape_vec(
        (8, 4),
        vec![
            1.0, 0.3, 2.0, 0.1, // class 1
            1.1, 0.9, 2.0, 0.2, // class 1
            0.9, 0.5, 2.0, 0.0, // class 1
            1.0, 0.1, 2.0, 0.3, // class 1
            3.0, 0.4, 2.0, 0.4, // class 2
            3.2, 0.8, 2.0, 0.3, // class 2
            2.9, 0.2, 2.0, 0.5, // class 2
            3.1, 0.6, 2.0, 0.6, // class 2
        ],
    )?;
    let class_sizes = [4, 4];

    println!("Synthetic X shape: {:?}", x.shape());

    let selector = SelectKBest::new(ScoringMethod::Fisher).with_k(2);
    let outcome = selector.fit_transform(&x, &class_sizes)?;
    println!(
        "Fisher top-{} features {:?} with scores {:?}",
        outcome.k.effective, outcome.indices, outcome.scores
    );
    println!("Reduced matrix:\n{}", outcome.reduced);

    for ranking in rank_all_methods(x.view(), &class_sizes, None)? {
        println!(
            "{:>24}: order {:?} scores {:?}",
            ranking.method.to_string(),
            ranking.selection.indices,
            ranking.scores
        );
    }

    Ok(())
}
