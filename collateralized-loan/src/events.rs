// ==========================================================================
// MÓDULO: collateralized-loan/src/events.rs
// Descrição: Eventos emitidos a cada transição do ledger. Todos os campos são
//            tópicos indexados, suficientes para reconstruir o estado sem consulta
// ==========================================================================

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("loanRequested")]
    fn loan_requested_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] collateral_amount: &BigUint,
        #[indexed] loan_amount: &BigUint,
        #[indexed] interest_rate: u64,
        #[indexed] due_date: u64,
    );

    #[event("loanFunded")]
    fn loan_funded_event(&self, #[indexed] loan_id: u64, #[indexed] lender: &ManagedAddress);

    #[event("loanRepaid")]
    fn loan_repaid_event(&self, #[indexed] loan_id: u64);

    #[event("collateralClaimed")]
    fn collateral_claimed_event(&self, #[indexed] loan_id: u64);

    // Alterações de configuração feitas pelo dono
    #[event("loanLimitsUpdated")]
    fn loan_limits_updated_event(
        &self,
        #[indexed] max_interest_rate: u64,
        #[indexed] max_loan_duration: u64,
    );
}
