// ==========================================================================
// MÓDULO: collateralized-loan/src/collateralized_loan.rs
// Descrição: Contrato inteligente de empréstimos colateralizados entre pares
//            na blockchain MultiversX: pedido, financiamento, pagamento e
//            execução do colateral em caso de inadimplência
// ==========================================================================

#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod events;
pub mod ledger;
pub mod views;

pub use common_types::{Loan, LoanError, LoanLimits, LoanStatus};

use config::ERR_ZERO_MAX_DURATION;

#[multiversx_sc::contract]
pub trait CollateralizedLoan:
    config::ConfigModule + events::EventsModule + ledger::LedgerModule + views::ViewsModule
{
    // Inicializa o contrato com os limites aplicados aos pedidos
    #[init]
    fn init(&self, max_interest_rate: u64, max_loan_duration: u64) {
        require!(max_loan_duration > 0, ERR_ZERO_MAX_DURATION);
        self.max_interest_rate().set(max_interest_rate);
        self.max_loan_duration().set(max_loan_duration);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Deposita o colateral (valor enviado) e abre o pedido de empréstimo
    #[payable("EGLD")]
    #[endpoint(requestLoan)]
    fn request_loan(&self, interest_rate: u64, duration: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        let collateral = self.call_value().egld_value().clone_value();
        let now = self.blockchain().get_block_timestamp();

        self.open_loan(&caller, collateral, interest_rate, duration, now)
            .unwrap_or_else(|err| sc_panic!(err.as_str()))
    }

    // Credor envia exatamente o principal
    #[payable("EGLD")]
    #[endpoint(fundLoan)]
    fn fund_loan(&self, loan_id: u64) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        let now = self.blockchain().get_block_timestamp();

        self.accept_funding(loan_id, &caller, &payment, now)
            .unwrap_or_else(|err| sc_panic!(err.as_str()));
    }

    // Tomador envia exatamente principal + juros
    #[payable("EGLD")]
    #[endpoint(repayLoan)]
    fn repay_loan(&self, loan_id: u64) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        self.settle_repayment(loan_id, &caller, &payment)
            .unwrap_or_else(|err| sc_panic!(err.as_str()));
    }

    #[endpoint(claimCollateral)]
    fn claim_collateral(&self, loan_id: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        self.seize_collateral(loan_id, &caller, now)
            .unwrap_or_else(|err| sc_panic!(err.as_str()));
    }
}
