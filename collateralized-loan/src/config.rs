// ==========================================================================
// MÓDULO: collateralized-loan/src/config.rs
// Descrição: Limites configuráveis pelo dono do contrato. Valem apenas para
//            novos pedidos; empréstimos existentes não são afetados
// ==========================================================================

multiversx_sc::imports!();

use common_types::LoanLimits;

use crate::events;

pub const ERR_ZERO_MAX_DURATION: &str = "Max loan duration must be greater than zero";

#[multiversx_sc::module]
pub trait ConfigModule: events::EventsModule {
    #[only_owner]
    #[endpoint(setMaxInterestRate)]
    fn set_max_interest_rate(&self, max_interest_rate: u64) {
        self.max_interest_rate().set(max_interest_rate);
        self.loan_limits_updated_event(max_interest_rate, self.max_loan_duration().get());
    }

    #[only_owner]
    #[endpoint(setMaxLoanDuration)]
    fn set_max_loan_duration(&self, max_loan_duration: u64) {
        require!(max_loan_duration > 0, ERR_ZERO_MAX_DURATION);
        self.max_loan_duration().set(max_loan_duration);
        self.loan_limits_updated_event(self.max_interest_rate().get(), max_loan_duration);
    }

    #[view(getMaxInterestRate)]
    fn get_max_interest_rate(&self) -> u64 {
        self.max_interest_rate().get()
    }

    #[view(getMaxLoanDuration)]
    fn get_max_loan_duration(&self) -> u64 {
        self.max_loan_duration().get()
    }

    fn loan_limits(&self) -> LoanLimits {
        LoanLimits {
            max_interest_rate: self.max_interest_rate().get(),
            max_loan_duration: self.max_loan_duration().get(),
        }
    }

    // Taxa máxima em percentual inteiro (inclusiva)
    #[storage_mapper("max_interest_rate")]
    fn max_interest_rate(&self) -> SingleValueMapper<u64>;

    // Prazo máximo em segundos (inclusivo)
    #[storage_mapper("max_loan_duration")]
    fn max_loan_duration(&self) -> SingleValueMapper<u64>;
}
