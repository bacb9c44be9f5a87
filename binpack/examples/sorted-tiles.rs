use binpack::{sort_by_max_side, GrowingPacker, InputItem};

fn main() {
    env_logger::init();

    let mut inputs: Vec<_> = [(32, 32), (64, 16), (16, 64), (48, 48), (8, 8), (8, 8)]
        .iter()
        .map(|&size| InputItem::new(size))
        .collect();
    sort_by_max_side(&mut inputs);

    let packer = GrowingPacker::new().max_size((256, 256));

    match packer.pack(inputs) {
        Ok(output) => {
            println!("{}", output);
            println!("Efficiency: {:.1}%", output.efficiency() * 100.0);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
