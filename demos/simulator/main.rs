//! SMS Gate Simulator
//!
//! Dispatches method-channel calls from the command line and answers the
//! permission prompts interactively.
//!
//! Run with: cargo run --example simulator -- getInbox sendSms deleteAll
//! Set SMS_GATE_SDK_VERSION=22 to simulate a platform without runtime checks.

use anyhow::Result;
use sms_gate::cli::Console;
use sms_gate::logging::init_logging;
use sms_gate::{grant_channel, ActionDispatcher, Dispatch, DispatcherConfig, HostResolver, SmsAction};

const DEFAULT_METHODS: [&str; 3] = ["getInbox", "sendSms", "deleteAll"];

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("logs")?;

    let console = Console::new();
    console.print_banner();

    let config = DispatcherConfig::default().with_env_overrides()?;
    console.print_system(&format!(
        "SDK {} (runtime permissions: {})",
        config.sdk_version,
        config.runtime_permissions()
    ));

    let (resolver, mut prompts) = HostResolver::new();
    let host = resolver.clone();

    let executor = |action: SmsAction| -> Result<()> {
        Console::new().print_executed(action.method_name());
        Ok(())
    };
    let mut dispatcher = ActionDispatcher::new(config, executor).with_resolver(resolver);
    dispatcher.set_on_permission_denied(|denied| Console::new().print_denied(&denied));

    let mut methods: Vec<String> = std::env::args().skip(1).collect();
    if methods.is_empty() {
        methods = DEFAULT_METHODS.iter().map(|m| m.to_string()).collect();
    }

    for method in &methods {
        let outcome = match dispatcher.dispatch_method(method) {
            Ok(outcome) => outcome,
            Err(e) => {
                console.print_error(&e.to_string());
                continue;
            }
        };
        console.print_dispatch(method, &outcome);

        if let Dispatch::Deferred { .. } = outcome {
            let (tx, rx) = grant_channel();
            while let Ok(prompt) = prompts.try_recv() {
                let granted = console.ask_permission(&prompt)?;
                tx.send(host.answer(prompt, granted))?;
            }
            drop(tx);
            dispatcher.run(rx).await;
        }
        console.print_separator();
    }

    Ok(())
}
