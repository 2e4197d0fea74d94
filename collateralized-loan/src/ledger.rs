// ==========================================================================
// MÓDULO: collateralized-loan/src/ledger.rs
// Descrição: Ledger de empréstimos. Cada transição recebe explicitamente quem
//            chama, o valor enviado e o horário atual, valida tudo antes de
//            gravar e só então move os fundos
// ==========================================================================

multiversx_sc::imports!();

use common_types::{Loan, LoanError};

use crate::{config, events};

#[multiversx_sc::module]
pub trait LedgerModule: config::ConfigModule + events::EventsModule {
    /// Cria um pedido com o colateral já recebido pelo contrato.
    /// O id vem do contador do ledger e nunca é reutilizado.
    fn open_loan(
        &self,
        borrower: &ManagedAddress,
        collateral: BigUint,
        interest_rate: u64,
        duration: u64,
        now: u64,
    ) -> Result<u64, LoanError> {
        let loan_id = self.loan_count().get();
        let loan = Loan::request(
            loan_id,
            borrower.clone(),
            collateral,
            interest_rate,
            duration,
            now,
            &self.loan_limits(),
        )?;

        self.loan_count().set(loan_id + 1);
        self.custody_balance()
            .update(|held| *held += &loan.collateral_amount);
        self.borrower_loans(borrower).push(&loan_id);

        self.loan_requested_event(
            loan_id,
            borrower,
            &loan.collateral_amount,
            &loan.loan_amount,
            loan.interest_rate,
            loan.due_date,
        );
        self.loans(loan_id).set(&loan);

        Ok(loan_id)
    }

    /// O principal não fica no contrato: segue direto para o tomador.
    fn accept_funding(
        &self,
        loan_id: u64,
        lender: &ManagedAddress,
        payment: &BigUint,
        now: u64,
    ) -> Result<(), LoanError> {
        let mut loan = self.load_loan(loan_id)?;
        loan.fund(lender, payment, now)?;

        self.loans(loan_id).set(&loan);
        self.lender_loans(lender).push(&loan_id);

        self.send().direct_egld(&loan.borrower, payment);
        self.loan_funded_event(loan_id, lender);

        Ok(())
    }

    /// Repassa principal + juros ao credor e devolve o colateral ao tomador.
    fn settle_repayment(
        &self,
        loan_id: u64,
        caller: &ManagedAddress,
        payment: &BigUint,
    ) -> Result<(), LoanError> {
        let mut loan = self.load_loan(loan_id)?;
        loan.repay(caller, payment)?;
        let lender = loan.lender.clone().ok_or(LoanError::NotFunded)?;

        self.loans(loan_id).set(&loan);
        self.custody_balance()
            .update(|held| *held -= &loan.collateral_amount);

        self.send().direct_egld(&lender, payment);
        self.send().direct_egld(&loan.borrower, &loan.collateral_amount);
        self.loan_repaid_event(loan_id);

        Ok(())
    }

    /// Inadimplência: o credor leva o colateral em custódia.
    fn seize_collateral(
        &self,
        loan_id: u64,
        caller: &ManagedAddress,
        now: u64,
    ) -> Result<(), LoanError> {
        let mut loan = self.load_loan(loan_id)?;
        loan.claim(caller, now)?;

        self.loans(loan_id).set(&loan);
        self.custody_balance()
            .update(|held| *held -= &loan.collateral_amount);

        self.send().direct_egld(caller, &loan.collateral_amount);
        self.collateral_claimed_event(loan_id);

        Ok(())
    }

    fn load_loan(&self, loan_id: u64) -> Result<Loan<Self::Api>, LoanError> {
        let loan_mapper = self.loans(loan_id);
        if loan_mapper.is_empty() {
            return Err(LoanError::NotFound);
        }
        Ok(loan_mapper.get())
    }

    // Storage mappers
    #[storage_mapper("loan_count")]
    fn loan_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("loans")]
    fn loans(&self, loan_id: u64) -> SingleValueMapper<Loan<Self::Api>>;

    // Soma do colateral de empréstimos ainda em aberto
    #[storage_mapper("custody_balance")]
    fn custody_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("borrower_loans")]
    fn borrower_loans(&self, borrower: &ManagedAddress) -> VecMapper<u64>;

    #[storage_mapper("lender_loans")]
    fn lender_loans(&self, lender: &ManagedAddress) -> VecMapper<u64>;
}
