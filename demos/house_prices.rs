extern crate gdlinreg;

use gdlinreg::{
    datafits::{compute_cost, compute_gradient, FnDatafit, Quadratic},
    datasets::DatasetBase,
    estimators::{estimators::LinearRegression, traits::Fit},
    solver::{GDSolver, HistoryMode, Params, Solver},
};
use ndarray::array;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Features - 1000s of square feet
    let x_train = array![1.0, 2.0];
    // Targets - 1000s of dollars
    let y_train = array![300.0, 500.0];
    let dataset = DatasetBase::new(x_train, y_train).unwrap();

    // Datafit - Solver API, with the historical history recording
    let solver = Solver::new()
        .learning_rate(1.0e-2)
        .n_iterations(10000)
        .history_mode(HistoryMode::Legacy)
        .verbose(true);
    let res = solver.solve(&dataset, &Quadratic, Params::new(0., 0.));
    println!(
        "(w,b) found by gradient descent: ({:8.4},{:8.4})",
        res.params.w, res.params.b
    );

    // The same run with the loss given as a pair of functions
    let datafit = FnDatafit::<f64, _, _>::new(
        |x, y, w, b| compute_cost(x, y, w, b).unwrap(),
        |x, y, w, b| compute_gradient(x, y, w, b).unwrap(),
    );
    let res_fn = solver
        .verbose(false)
        .solve(&dataset, &datafit, Params::new(0., 0.));
    assert_eq!(res, res_fn);

    // Estimator API
    let model = LinearRegression::params()
        .learning_rate(1.0e-2)
        .n_iterations(10000)
        .fit(&dataset)
        .unwrap();
    let predictions = model.predict(&array![1.0, 2.0]);
    println!("1000 sqft house prediction {:.1} Thousand dollars", predictions[0]);
    println!("2000 sqft house prediction {:.1} Thousand dollars", predictions[1]);
}
