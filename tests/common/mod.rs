use grin::mach::{Event, Runtime};

pub fn runtime(source: &[&str]) -> Runtime {
    match Runtime::compile(source) {
        Ok(runtime) => runtime,
        Err(error) => panic!("{}", error),
    }
}

pub fn exec(source: &[&str]) -> String {
    match Runtime::compile(source) {
        Ok(mut runtime) => exec_n(&mut runtime, 5000),
        Err(error) => format!("{}\n", error),
    }
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}
