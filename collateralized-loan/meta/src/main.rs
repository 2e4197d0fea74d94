fn main() {
    multiversx_sc_meta_lib::cli_main::<collateralized_loan::AbiProvider>();
}
