use gcode_interpreter::parser::parse_program;

fn main() {
    println!("=== Program Parser Demo ===");

    let programs = [
        "%\nO1000\nG00 X0 Y0 Z0\n%\n",
        "%\nO7\nN10 G01 X1.5 Y-2. (cut)\nM30\n%\n",
        "%\nO7\nG01 X1 @@\n%\n",
        "%\nO7\ng01 x1\n%\n",
    ];

    for source in programs {
        println!("\nInput: {:?}", source);
        match parse_program(source) {
            Ok(program) => println!("Parsed:\n{}", program),
            Err(e) => println!("Parse error: {}", e),
        }
    }
}
