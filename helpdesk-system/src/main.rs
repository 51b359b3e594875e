mod api;
mod infrastructure;
mod maintenance;
mod server;

fn main() {
    server::run();
}
