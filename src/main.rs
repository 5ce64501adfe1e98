//! Evaluates the reference condition tree and prints the result

use condition_tree::{
    create_and_condition, create_or_condition, false_condition, true_condition, Condition,
    Evaluator, EvaluatorConfig,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn reference_tree() -> Condition {
    create_or_condition(vec![
        create_and_condition(vec![
            true_condition(),
            create_or_condition(vec![false_condition(), false_condition()]),
        ]),
        create_and_condition(vec![
            true_condition(),
            false_condition(),
            create_or_condition(vec![false_condition(), true_condition()]),
        ]),
        create_and_condition(vec![
            create_and_condition(vec![
                create_or_condition(vec![true_condition(), true_condition()]),
                false_condition(),
            ]),
            false_condition(),
        ]),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = EvaluatorConfig::from_env()?;
    let tree = reference_tree();
    info!(strategy = %config.strategy, tree = %tree, "evaluating");

    let result = Evaluator::new(config).evaluate(&tree);
    println!("{}", result);
    Ok(())
}
