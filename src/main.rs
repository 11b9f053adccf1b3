use clap::Parser;
use midiscoprs::{
    cli::{validate_device, Args},
    create_scheduler, create_shared_session, handle_device_list,
    midi::DefaultMidiEngine,
    stream, ui, Scheduler, SharedSession,
};
use std::{thread, time::Duration};

fn main() {
    initialize_logging();
    let args = Args::parse();
    let devices = handle_device_list();

    if args.device_list {
        list_available_devices(&devices);
        return;
    }

    let device_name = match &args.bind_to_device {
        Some(name) => name.clone(),
        None => {
            eprintln!("No MIDI device specified. Use --bind-to-device, or --device-list to see what is available.");
            std::process::exit(1);
        }
    };

    if let Err(error_msg) = validate_device(&device_name, &devices) {
        log::error!("{}", error_msg);
        eprintln!("{}", error_msg);
        std::process::exit(1);
    }

    let scheduler = create_scheduler();
    let session = create_shared_session();
    let note_window = Duration::from_secs(args.note_window);

    initialize_stream(device_name, note_window, &scheduler, &session);

    run_application_loop();
}

fn initialize_logging() {
    midiscoprs::logging::init_logger().expect("Logger initialization failed");
    log::info!("Application starting");
}

fn list_available_devices(devices: &[String]) {
    println!("Available MIDI devices:");
    for device in devices {
        println!("  - {}", device);
    }
}

fn initialize_stream<T: Scheduler>(
    device_name: String,
    note_window: Duration,
    scheduler: &T,
    session: &SharedSession,
) {
    match DefaultMidiEngine::new(&device_name) {
        Ok(engine) => {
            log::info!("Successfully connected to MIDI device: {}", device_name);
            println!("Successfully connected to MIDI device: {}", device_name);

            let stream_session = session.clone();
            scheduler.spawn(move || {
                stream::run_stream_with_window(engine, stream_session, note_window);
            });

            let inspector_session = session.clone();
            scheduler.spawn(move || {
                ui::run_session_inspector(inspector_session);
            });
        }
        Err(e) => {
            let error_msg = format!("Error connecting to MIDI device: {}", e);
            log::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn run_application_loop() {
    log::info!("Application running. Press Ctrl+C to exit...");
    println!("\nPress Ctrl+C to exit...");
    loop {
        thread::sleep(Duration::from_secs(1));
    }
}
