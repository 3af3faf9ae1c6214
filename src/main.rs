use ruscbc::solver::Solver;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Expected filename of an MPS file as an argument");

    let mut solver = Solver::from_mps_file(&path).expect("could not read the problem");
    solver.solve().expect("solve failed");
    let result = solver.results().expect("no results available");

    println!("Status: {}", result.status());
    println!("Obj val: {}", result.objective_value());
    println!("N cols: {}", solver.num_cols());
    println!("N rows: {}", solver.num_rows());
    println!("Iterations: {}", result.iterations());
}
