use kmap::*;

fn main() {
    println!("A simple example!");

    let function = Function::new(vec![5, 6, 9, 13, 15], vec![1, 7, 14]).unwrap();
    println!("{}", function.grid());

    let result = function.minimize();
    println!("Minimal expression: {}", &result);
    for (grouping, minterms) in result.groupings().iter().zip(result.covered_minterms()) {
        println!("  {} covers {}", grouping, minterms);
    }

    println!("{}", result.verilog(&DEFAULT_RENDER_CFG));
}
