//! The epoch loop

use super::{BatchIterator, TrainConfig};
use crate::network::FraudNet;
use crate::optim::{Adam, Optimizer};
use ndarray::{Array1, Array2};

/// Train a fresh network on unweighted labels.
///
/// Builds a [`FraudNet`] sized to the feature dimensionality, then runs
/// `config.epochs` passes of mini-batch Adam on binary cross-entropy,
/// printing one progress line per epoch (mean loss and unweighted
/// accuracy). Returns the trained network; persisting it is the caller's
/// concern.
pub fn train(features: &Array2<f32>, labels: &Array1<f32>, config: &TrainConfig) -> FraudNet {
    let input_dim = features.ncols();
    let n_rows = features.nrows();
    let mut net = FraudNet::new(input_dim, config.hidden_units, config.seed);

    println!(
        "Architecture: {input_dim} -> {} (ReLU) -> 1 (Sigmoid)",
        config.hidden_units
    );
    println!("Trainable parameters: {}", net.num_parameters());

    let mut optimizer = Adam::default_params(config.learning_rate);
    let mut batches = BatchIterator::new(features.view(), labels.view(), config.batch_size);

    for epoch in 1..=config.epochs {
        batches.reshuffle(config.seed, epoch);

        let mut loss_sum = 0.0f64;
        let mut correct = 0usize;
        while let Some((x, y)) = batches.next_batch() {
            let pass = net.backward(x.view(), y.view());
            optimizer.step(&mut net.parameters_mut(), &pass.grads.as_slices());

            loss_sum += f64::from(pass.loss) * x.nrows() as f64;
            correct += pass.correct;
        }

        println!(
            "Epoch {epoch}/{} - loss: {:.4} - accuracy: {:.4}",
            config.epochs,
            loss_sum / n_rows as f64,
            correct as f64 / n_rows as f64,
        );
    }

    net
}
