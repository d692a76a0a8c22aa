use anyhow::Result;
use gcode_interpreter::runner::run;

fn main() -> Result<()> {
    run()
}
