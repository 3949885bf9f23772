fn main() {
    // Emit ESP-IDF link arguments only for device builds; host-target
    // test builds have no IDF toolchain to probe.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
