fn main() {
    akash_vpn::run_app();
}
