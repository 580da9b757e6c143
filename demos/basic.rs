use spwin::prelude::*;

fn main() {
    let box_ = BoxWindow::from_pairs(&[[0.0, 2.0], [-1.0, 1.0]]);
    let ball = BallWindow::new(vec![0.0, 0.0], 1.0);

    println!("{}", box_.describe());
    println!("  volume {}, extent {}", box_.volume(), box_.extent());
    println!("{}", ball.describe());
    println!("  volume {}", ball.volume());

    let mut rng = random_number_generator(Some(139));
    for point in box_.sample(5, &mut rng) {
        println!("box sample {:?}", point);
    }
    for point in ball.sample(5, &mut rng) {
        println!("ball sample {:?}", point);
    }

    let unit = BoxWindow::unit(&[0.5, 0.5]);
    println!("{}", unit.describe());
    println!("  center {:?}", unit.center());
    println!("  contains origin: {}", unit.contains(&[0.0, 0.0]).unwrap());
}
