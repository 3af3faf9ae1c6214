use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=COINOR_DIR");

    if let Ok(coin_dir) = env::var("COINOR_DIR") {
        let lib_dir = PathBuf::from(&coin_dir).join("lib");
        if lib_dir.exists() {
            println!("cargo:warning=Using COIN-OR from {}", lib_dir.display());
            println!("cargo:rustc-link-search={}", lib_dir.display());
        } else {
            panic!(
                "{}/lib does not exist, please check your COIN-OR installation",
                coin_dir
            );
        }
    } else {
        println!(
            "cargo:warning=COINOR_DIR was not defined, looking for CBC/CLP in system libraries"
        );
    }

    println!("cargo:rustc-link-lib=CbcSolver");
    println!("cargo:rustc-link-lib=Cbc");
    println!("cargo:rustc-link-lib=Cgl");
    println!("cargo:rustc-link-lib=OsiClp");
    println!("cargo:rustc-link-lib=Osi");
    println!("cargo:rustc-link-lib=Clp");
    println!("cargo:rustc-link-lib=CoinUtils");
}
