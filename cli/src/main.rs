use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use ddp24_core::word::SIGN_BIT;
use ddp24_core::Processor;

/// DDP-24 Emulator - Viking Mars Lander Guidance Computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Binary image to load (3 bytes per word, big-endian).
    program: Option<PathBuf>,

    /// Drop into an interactive step/run/dump console after loading.
    #[arg(short, long)]
    interactive: bool,

    /// Run the built-in instruction tests instead of loading a program.
    #[arg(short, long)]
    test: bool,

    /// Print a CPU state dump after the program runs to completion.
    #[arg(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.test {
        let failed = run_tests();
        return ExitCode::from(failed.min(255) as u8);
    }

    let mut cpu = Processor::new();

    if let Some(program) = &cli.program {
        match cpu.load(program) {
            Ok(words) => println!("Loaded {words} words from {}", program.display()),
            Err(err) => {
                eprintln!("{}: {err}", "error".red().bold());
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.interactive {
        interactive_mode(&mut cpu);
    } else if cli.program.is_some() {
        cpu.run(0);
        if cli.dump {
            print!("{}", cpu.dump());
        }
    } else {
        eprintln!("no program given; pass -i for interactive mode or a program path");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn interactive_mode(cpu: &mut Processor) {
    println!("DDP-24 Interactive Mode. Commands: s(tep), r(un), d(ump), m(emory), q(uit)");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !cpu.registers.halted {
        print!("{} ", "ddp24>".cyan());
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match line.chars().next() {
            Some('s') => {
                cpu.step();
                println!(
                    "PC={:05o} A={:08o} B={:08o}",
                    cpu.registers.pc, cpu.registers.a, cpu.registers.b
                );
            }
            Some('r') => {
                cpu.run(0);
                println!("Halted after {} cycles", cpu.registers.cycles);
            }
            Some('d') => print!("{}", cpu.dump()),
            Some('m') => match u32::from_str_radix(line[1..].trim(), 8) {
                Ok(addr) => println!("[{addr:05o}] = {:08o}", cpu.read(addr)),
                Err(_) => println!("Usage: m <octal_addr>"),
            },
            Some('q') => return,
            None => {}
            _ => println!("Unknown command. Use s, r, d, m <addr>, or q"),
        }
    }

    if cpu.registers.halted {
        println!("{}", "CPU halted.".yellow());
        print!("{}", cpu.dump());
    }
}

/// A single scripted instruction test: the program to load, and a check
/// against the processor once it has run to completion.
struct Scenario {
    name: &'static str,
    /// Run against a fresh processor before `program` is loaded into memory.
    initial: fn(&mut Processor),
    program: &'static [(u32, u32)],
    check: fn(&Processor) -> bool,
}

fn no_initial_state(_cpu: &mut Processor) {}

fn run_tests() -> u32 {
    println!("=== DDP-24 Instruction Tests ===\n");

    let scenarios: &[Scenario] = &[
        Scenario {
            name: "LDA/STA",
            initial: no_initial_state,
            program: &[
                (0, op(0o24, 0x100)),
                (1, op(0o05, 0x101)),
                (2, op(0o00, 0)),
                (0x100, 0x123456),
            ],
            check: |cpu| cpu.read(0x101) == 0x123456,
        },
        Scenario {
            name: "ADD",
            initial: no_initial_state,
            program: &[
                (0, op(0o24, 0x100)),
                (1, op(0o10, 0x101)),
                (2, op(0o05, 0x102)),
                (3, op(0o00, 0)),
                (0x100, 5),
                (0x101, 3),
            ],
            check: |cpu| cpu.read(0x102) == 8,
        },
        Scenario {
            name: "SUB",
            initial: no_initial_state,
            program: &[
                (0, op(0o24, 0x100)),
                (1, op(0o11, 0x101)),
                (2, op(0o05, 0x102)),
                (3, op(0o00, 0)),
                (0x100, 8),
                (0x101, 3),
            ],
            check: |cpu| cpu.read(0x102) == 5,
        },
        Scenario {
            name: "JMP",
            initial: no_initial_state,
            program: &[
                (0, op(0o74, 0o10)),
                (1, op(0o00, 0)),
                (0o10, op(0o24, 0x100)),
                (0o11, op(0o00, 0)),
                (0x100, 0x424242),
            ],
            check: |cpu| cpu.registers.a == 0x424242,
        },
        Scenario {
            name: "JZE",
            initial: no_initial_state,
            program: &[
                (0, op(0o24, 0x100)),
                (1, op(0o71, 0o10)),
                (2, op(0o24, 0x101)),
                (3, op(0o00, 0)),
                (0o10, op(0o24, 0x102)),
                (0o11, op(0o00, 0)),
                (0x100, 0),
                (0x101, 0xBAD),
                (0x102, 0x600D),
            ],
            check: |cpu| cpu.registers.a == 0x600D,
        },
        Scenario {
            name: "ANA",
            initial: no_initial_state,
            program: &[
                (0, op(0o24, 0x100)),
                (1, op(0o15, 0x101)),
                (2, op(0o00, 0)),
                (0x100, 0xFF00FF),
                (0x101, 0x0F0F0F),
            ],
            check: |cpu| cpu.registers.a == 0x0F000F,
        },
        Scenario {
            name: "MPY",
            initial: no_initial_state,
            program: &[
                (0, op(0o23, 0x100)),
                (1, op(0o34, 0x101)),
                (2, op(0o00, 0)),
                (0x100, 100),
                (0x101, 50),
            ],
            check: |cpu| cpu.registers.b == 5000 && cpu.registers.a == 0,
        },
        Scenario {
            name: "MPY (signed)",
            initial: no_initial_state,
            program: &[
                (0, op(0o23, 0x100)),
                (1, op(0o34, 0x101)),
                (2, op(0o00, 0)),
                (0x100, SIGN_BIT | 5),
                (0x101, 3),
            ],
            check: |cpu| cpu.registers.b == (SIGN_BIT | 15) && cpu.registers.a == SIGN_BIT,
        },
        Scenario {
            name: "DIV",
            initial: |cpu| cpu.registers.b = 5000,
            program: &[(0, op(0o35, 0x100)), (1, op(0o00, 0)), (0x100, 50)],
            check: |cpu| cpu.registers.b == 100 && cpu.registers.a == 0,
        },
        Scenario {
            name: "improper divide",
            initial: no_initial_state,
            program: &[(0, op(0o35, 0x100)), (1, op(0o00, 0)), (0x100, 10)],
            check: |cpu| cpu.registers.overflow,
        },
        Scenario {
            name: "unimplemented opcode halts",
            initial: no_initial_state,
            program: &[(0, op(0o46, 0))],
            check: |cpu| cpu.registers.halted,
        },
    ];

    let mut passed = 0;
    let mut failed = 0;

    for scenario in scenarios {
        let mut cpu = Processor::new();
        (scenario.initial)(&mut cpu);
        for &(addr, value) in scenario.program {
            cpu.write(addr, value);
        }
        cpu.run(100);

        if (scenario.check)(&cpu) {
            println!("{} {}", "PASS:".green().bold(), scenario.name);
            passed += 1;
        } else {
            println!("{} {}", "FAIL:".red().bold(), scenario.name);
            failed += 1;
        }
    }

    println!("\n=== Results: {passed} passed, {failed} failed ===");
    failed
}

const fn op(opcode: u32, address: u32) -> u32 {
    (opcode << 18) | address
}
