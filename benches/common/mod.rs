/// Generate a program of `lines` blocks following one of a few patterns
pub fn generate_program(lines: usize, pattern: &str) -> String {
    let mut content = String::from("%\nO1000\n");

    match pattern {
        "movement_heavy" => {
            for i in 0..lines {
                content.push_str(&format!(
                    "G01 X{:.3} Y{:.3} Z{:.3}\n",
                    (i as f32) * 0.1,
                    (i as f32) * 0.2,
                    (i as f32) * -0.05
                ));
            }
        }
        "numbered_comments" => {
            for i in 0..lines {
                content.push_str(&format!(
                    "N{} G00 X{:.1} Y{:.1} (segment {} of layer {})\n",
                    i * 10,
                    (i as f32) * 0.1,
                    (i as f32) * 0.1,
                    i % 100,
                    i / 100
                ));
            }
        }
        "mixed" => {
            for i in 0..lines {
                match i % 4 {
                    0 => content.push_str(&format!(
                        "G01 X{:.3} Y{:.3} F1500\n",
                        (i as f32) * 0.1,
                        (i as f32) * 0.2
                    )),
                    1 => content.push_str(&format!("T{} M06\n", i % 8)),
                    2 => content.push_str(&format!("S{}\n", 8000 + (i % 50))),
                    3 => content.push_str(&format!("G00 Z{:.2}\n", (i as f32) * 0.1)),
                    _ => unreachable!(),
                }
            }
        }
        _ => {
            for i in 0..lines {
                content.push_str(&format!("G01 X{} Y{}\n", i, i));
            }
        }
    }

    content.push_str("M30\n%\n");
    content
}
