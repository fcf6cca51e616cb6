use fitness_tracker::{Workout, read_package};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let record = read_package("RUN", &[15000.0, 1.0, 75.0])?;
    println!("{}", record.summary());
    Ok(())
}
