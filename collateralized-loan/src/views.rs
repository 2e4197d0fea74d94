// ==========================================================================
// MÓDULO: collateralized-loan/src/views.rs
// Descrição: Consultas somente leitura sobre o ledger
// ==========================================================================

multiversx_sc::imports!();

use common_types::{Loan, LoanStatus};

use crate::{config, events, ledger};

#[multiversx_sc::module]
pub trait ViewsModule: ledger::LedgerModule + config::ConfigModule + events::EventsModule {
    #[view(getLoan)]
    fn get_loan(&self, loan_id: u64) -> Loan<Self::Api> {
        self.load_loan(loan_id)
            .unwrap_or_else(|err| sc_panic!(err.as_str()))
    }

    #[view(getLoanStatus)]
    fn get_loan_status(&self, loan_id: u64) -> LoanStatus {
        self.get_loan(loan_id).status
    }

    #[view(getLoanCount)]
    fn get_loan_count(&self) -> u64 {
        self.loan_count().get()
    }

    // Valor exato que repayLoan aceita
    #[view(getRepaymentAmount)]
    fn get_repayment_amount(&self, loan_id: u64) -> BigUint {
        self.get_loan(loan_id).repayment_amount()
    }

    // Id desconhecido responde false em vez de falhar
    #[view(isClaimable)]
    fn is_claimable(&self, loan_id: u64) -> bool {
        let now = self.blockchain().get_block_timestamp();
        match self.load_loan(loan_id) {
            Ok(loan) => loan.is_claimable(now),
            Err(_) => false,
        }
    }

    #[view(getBorrowerLoans)]
    fn get_borrower_loans(&self, borrower: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut loan_ids = MultiValueEncoded::new();
        for loan_id in self.borrower_loans(&borrower).iter() {
            loan_ids.push(loan_id);
        }
        loan_ids
    }

    #[view(getLenderLoans)]
    fn get_lender_loans(&self, lender: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut loan_ids = MultiValueEncoded::new();
        for loan_id in self.lender_loans(&lender).iter() {
            loan_ids.push(loan_id);
        }
        loan_ids
    }

    #[view(getCustodyBalance)]
    fn get_custody_balance(&self) -> BigUint {
        self.custody_balance().get()
    }
}
