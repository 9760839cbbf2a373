/// Binary entrypoint for the `myapp` executable.
///
/// All behavior lives in `myapp_lib` so tests can drive it directly.
fn main() {
    myapp_lib::run();
}
