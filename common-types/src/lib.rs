// ==========================================================================
// MÓDULO: common-types/src/lib.rs
// Descrição: Tipos compartilhados do ledger de empréstimos colateralizados:
//            registro do empréstimo, estados, erros e regras de transição
// ==========================================================================

#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// Juros expressos em percentual inteiro (5 = 5%)
pub const PERCENT_DENOMINATOR: u64 = 100;

// Prazo máximo sugerido para o deploy: 10 anos em segundos
pub const DEFAULT_MAX_LOAN_DURATION: u64 = 3650 * 24 * 60 * 60;

// Estados do empréstimo. Repaid e Defaulted são terminais.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoanStatus {
    Requested,
    Funded,
    Repaid,
    Defaulted,
}

impl LoanStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoanStatus::Repaid | LoanStatus::Defaulted)
    }
}

// Erros tipados do ledger. A mensagem é estável e vira o erro do usuário na transação.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoanError {
    NotFound,
    AlreadyFunded,
    AlreadyResolved,
    NotFunded,
    WrongAmount,
    NotYetDue,
    Unauthorized,
    InvalidAmount,
    InvalidDuration,
    InvalidInterestRate,
}

impl LoanError {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanError::NotFound => "Loan not found",
            LoanError::AlreadyFunded => "Loan already funded",
            LoanError::AlreadyResolved => "Loan already resolved",
            LoanError::NotFunded => "Loan not funded",
            LoanError::WrongAmount => "Payment does not match the required amount",
            LoanError::NotYetDue => "Loan is not yet due",
            LoanError::Unauthorized => "Caller is not allowed to perform this action",
            LoanError::InvalidAmount => "Collateral must be greater than zero",
            LoanError::InvalidDuration => "Invalid loan duration",
            LoanError::InvalidInterestRate => "Interest rate exceeds the allowed maximum",
        }
    }
}

// Limites configurados pelo dono do contrato, aplicados somente na solicitação
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LoanLimits {
    pub max_interest_rate: u64,
    pub max_loan_duration: u64,
}

/// Um pedido de empréstimo e todo o seu ciclo de vida.
///
/// O valor do empréstimo é sempre igual ao colateral (1:1). Nenhum dos dois muda
/// depois da criação; só `lender`, `funded_at` e `status` evoluem.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct Loan<M: ManagedTypeApi> {
    pub id: u64,
    pub borrower: ManagedAddress<M>,
    pub lender: Option<ManagedAddress<M>>,
    pub collateral_amount: BigUint<M>,
    pub loan_amount: BigUint<M>,
    pub interest_rate: u64,
    pub created_at: u64,
    pub due_date: u64,
    pub funded_at: Option<u64>,
    pub status: LoanStatus,
}

impl<M: ManagedTypeApi> Loan<M> {
    /// Valida um pedido e monta o registro no estado Requested.
    /// O prazo conta a partir do pedido, não do financiamento.
    pub fn request(
        id: u64,
        borrower: ManagedAddress<M>,
        collateral: BigUint<M>,
        interest_rate: u64,
        duration: u64,
        now: u64,
        limits: &LoanLimits,
    ) -> Result<Self, LoanError> {
        if collateral == BigUint::zero() {
            return Err(LoanError::InvalidAmount);
        }
        if duration == 0 || duration > limits.max_loan_duration {
            return Err(LoanError::InvalidDuration);
        }
        if interest_rate > limits.max_interest_rate {
            return Err(LoanError::InvalidInterestRate);
        }
        let due_date = now.checked_add(duration).ok_or(LoanError::InvalidDuration)?;

        Ok(Loan {
            id,
            borrower,
            lender: None,
            loan_amount: collateral.clone(),
            collateral_amount: collateral,
            interest_rate,
            created_at: now,
            due_date,
            funded_at: None,
            status: LoanStatus::Requested,
        })
    }

    pub fn is_funded(&self) -> bool {
        self.status != LoanStatus::Requested
    }

    pub fn is_repaid(&self) -> bool {
        self.status == LoanStatus::Repaid
    }

    pub fn collateral_claimed(&self) -> bool {
        self.status == LoanStatus::Defaulted
    }

    pub fn is_overdue(&self, now: u64) -> bool {
        now >= self.due_date
    }

    // principal + floor(principal * taxa / 100)
    pub fn repayment_amount(&self) -> BigUint<M> {
        repayment_amount(&self.loan_amount, self.interest_rate)
    }

    /// Requested -> Funded. O pagamento precisa ser exatamente o principal.
    pub fn fund(
        &mut self,
        lender: &ManagedAddress<M>,
        payment: &BigUint<M>,
        now: u64,
    ) -> Result<(), LoanError> {
        if self.is_funded() {
            return Err(LoanError::AlreadyFunded);
        }
        if payment != &self.loan_amount {
            return Err(LoanError::WrongAmount);
        }

        self.lender = Some(lender.clone());
        self.funded_at = Some(now);
        self.status = LoanStatus::Funded;
        Ok(())
    }

    /// Funded -> Repaid. Só o tomador paga, e com o valor exato.
    pub fn repay(
        &mut self,
        caller: &ManagedAddress<M>,
        payment: &BigUint<M>,
    ) -> Result<(), LoanError> {
        self.ensure_open()?;
        if caller != &self.borrower {
            return Err(LoanError::Unauthorized);
        }
        if payment != &self.repayment_amount() {
            return Err(LoanError::WrongAmount);
        }

        self.status = LoanStatus::Repaid;
        Ok(())
    }

    /// Funded -> Defaulted. Só o credor, e só a partir do vencimento.
    pub fn claim(&mut self, caller: &ManagedAddress<M>, now: u64) -> Result<(), LoanError> {
        self.ensure_open()?;
        if self.lender.as_ref() != Some(caller) {
            return Err(LoanError::Unauthorized);
        }
        if !self.is_overdue(now) {
            return Err(LoanError::NotYetDue);
        }

        self.status = LoanStatus::Defaulted;
        Ok(())
    }

    pub fn is_claimable(&self, now: u64) -> bool {
        self.ensure_open().is_ok() && self.is_overdue(now)
    }

    // Financiado e ainda sem desfecho
    fn ensure_open(&self) -> Result<(), LoanError> {
        if self.status.is_terminal() {
            return Err(LoanError::AlreadyResolved);
        }
        if !self.is_funded() {
            return Err(LoanError::NotFunded);
        }
        Ok(())
    }
}

// Truncamento inteiro, sem arredondar para cima
pub fn repayment_amount<M: ManagedTypeApi>(loan_amount: &BigUint<M>, interest_rate: u64) -> BigUint<M> {
    let interest =
        loan_amount * &BigUint::<M>::from(interest_rate) / &BigUint::<M>::from(PERCENT_DENOMINATOR);
    loan_amount + &interest
}
