#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// # Tip Jar
///
/// **Role:** Minimal on-chain tipping ledger. Accepts native-value transfers
/// tagged with a message, records each as a numbered entry, tracks the entry
/// IDs per sender, and lets the owner sweep the accumulated balance.
///
/// **Ledger model:**
/// ```text
///   tip(msg) + value ──► Tip { from, amount, message, timestamp }
///                          stored at ID = total_tips + 1   (1-based, gapless)
///                          ID appended to user_tips[from]
///   withdraw()        ──► entire contract balance → owner
/// ```
///
/// The ledger is append-only: entries are never updated or removed, and the
/// tip counter never decreases. Every mutating message either fully applies
/// or returns an `Error` with no state change — the dispatch layer rolls
/// back on `Err`.
///
/// Bare transfers (value sent without a message) land on `receive()`, which
/// records a tip with a fixed placeholder message.
#[ink::contract]
mod tip_jar {
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    // =========================================================================
    // CONSTANTS
    // =========================================================================

    /// Message recorded for bare value transfers that carry no message.
    pub const FALLBACK_MESSAGE: &str = "(no message)";

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct TipJar {
        /// Deployer, until ownership is transferred. Sole identity allowed
        /// to withdraw.
        owner: AccountId,

        /// Number of accepted tips. Doubles as the highest valid tip ID;
        /// IDs are 1-based and assigned sequentially.
        total_tips: u32,

        /// Tip ID → entry. Every ID in `1..=total_tips` is present.
        tips: Mapping<u32, Tip>,

        /// Sender → IDs of their tips, in acceptance order.
        user_tips: Mapping<AccountId, Vec<u32>>,
    }

    /// One accepted tip. Immutable once stored.
    #[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct Tip {
        pub from: AccountId,
        pub amount: Balance,
        pub message: String,
        pub timestamp: Timestamp,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Emitted for every accepted tip, explicit or bare-transfer.
    #[ink(event)]
    pub struct NewTip {
        #[ink(topic)]
        from: AccountId,
        amount: Balance,
        message: String,
    }

    /// Emitted after a successful sweep. `amount` is the amount actually
    /// transferred, read immediately before the transfer.
    #[ink(event)]
    pub struct Withdrawal {
        #[ink(topic)]
        owner: AccountId,
        amount: Balance,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Tip carried no value.
        ZeroValue,
        /// Tip message was empty.
        EmptyMessage,
        /// Caller is not the contract owner.
        NotOwner,
        /// Withdraw called with a zero contract balance.
        NothingToWithdraw,
        /// Native transfer to the owner was rejected.
        TransferFailed,
        /// New owner is the zero account.
        InvalidNewOwner,
        /// New owner is already the current owner.
        SameOwner,
        /// Tip ID outside `1..=total_tips`.
        InvalidTipId,
        /// `latest_tips` called with a count of zero.
        InvalidCount,
        /// Arithmetic overflow.
        Overflow,
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl TipJar {
        /// Deploys an empty ledger owned by the caller.
        #[ink(constructor)]
        pub fn new() -> Self {
            Self {
                owner: Self::env().caller(),
                total_tips: 0,
                tips: Mapping::default(),
                user_tips: Mapping::default(),
            }
        }

        // =================================================================
        // TIP INTAKE
        // =================================================================

        /// Record a tip: the attached value plus a message.
        ///
        /// Rejects zero-value calls and empty messages; on success the tip
        /// is stored under the next sequential ID and `NewTip` is emitted.
        #[ink(message, payable)]
        pub fn tip(&mut self, message: String) -> Result<(), Error> {
            self.record_tip(message)
        }

        /// Entry point for bare value transfers. Records a tip with the
        /// placeholder message; a zero-value transfer is rejected the same
        /// way as an explicit zero-value tip.
        #[ink(message, payable)]
        pub fn receive(&mut self) -> Result<(), Error> {
            self.record_tip(String::from(FALLBACK_MESSAGE))
        }

        fn record_tip(&mut self, message: String) -> Result<(), Error> {
            let amount = self.env().transferred_value();
            if amount == 0 {
                return Err(Error::ZeroValue);
            }
            if message.is_empty() {
                return Err(Error::EmptyMessage);
            }

            let from = self.env().caller();
            let id = self.total_tips.checked_add(1).ok_or(Error::Overflow)?;

            self.tips.insert(
                id,
                &Tip {
                    from,
                    amount,
                    message: message.clone(),
                    timestamp: self.env().block_timestamp(),
                },
            );

            let mut ids = self.user_tips.get(from).unwrap_or_default();
            ids.push(id);
            self.user_tips.insert(from, &ids);

            self.total_tips = id;

            self.env().emit_event(NewTip { from, amount, message });

            Ok(())
        }

        // =================================================================
        // WITHDRAWAL
        // =================================================================

        /// Sweep the entire contract balance to the owner.
        ///
        /// Reads the balance, transfers, then emits `Withdrawal` with the
        /// transferred amount. A rejected transfer surfaces as
        /// `TransferFailed` and the call reverts with the balance intact.
        #[ink(message)]
        pub fn withdraw(&mut self) -> Result<(), Error> {
            self.only_owner()?;

            let amount = self.env().balance();
            if amount == 0 {
                return Err(Error::NothingToWithdraw);
            }

            self.env()
                .transfer(self.owner, amount)
                .map_err(|_| Error::TransferFailed)?;

            self.env().emit_event(Withdrawal {
                owner: self.owner,
                amount,
            });

            Ok(())
        }

        // =================================================================
        // OWNERSHIP
        // =================================================================

        /// Hand the ledger to a new owner. No event is emitted for this
        /// transition; observers must watch the `owner` storage item.
        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), Error> {
            self.only_owner()?;

            if new_owner == AccountId::from([0x0; 32]) {
                return Err(Error::InvalidNewOwner);
            }
            if new_owner == self.owner {
                return Err(Error::SameOwner);
            }

            self.owner = new_owner;
            Ok(())
        }

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(())
        }

        // =================================================================
        // VIEW FUNCTIONS
        // =================================================================

        /// Accumulated value held by the contract, pending withdrawal.
        #[ink(message)]
        pub fn balance(&self) -> Balance {
            self.env().balance()
        }

        /// Number of tips accepted so far; also the highest valid tip ID.
        #[ink(message)]
        pub fn total_tips(&self) -> u32 {
            self.total_tips
        }

        /// The tip stored at `id`. IDs run from 1 to `total_tips()`.
        #[ink(message)]
        pub fn get_tip(&self, id: u32) -> Result<Tip, Error> {
            if id == 0 || id > self.total_tips {
                return Err(Error::InvalidTipId);
            }
            self.tips.get(id).ok_or(Error::InvalidTipId)
        }

        /// Up to `count` most recent tips, newest first, as parallel
        /// sequences `(from, amount, message, timestamp)`.
        ///
        /// An oversized `count` caps at `total_tips()` entries; `count == 0`
        /// is rejected.
        #[ink(message)]
        pub fn latest_tips(
            &self,
            count: u32,
        ) -> Result<(Vec<AccountId>, Vec<Balance>, Vec<String>, Vec<Timestamp>), Error> {
            if count == 0 {
                return Err(Error::InvalidCount);
            }

            let n = count.min(self.total_tips);
            let mut froms = Vec::with_capacity(n as usize);
            let mut amounts = Vec::with_capacity(n as usize);
            let mut messages = Vec::with_capacity(n as usize);
            let mut timestamps = Vec::with_capacity(n as usize);

            for offset in 0..n {
                let id = self.total_tips - offset;
                let tip = self.tips.get(id).ok_or(Error::InvalidTipId)?;
                froms.push(tip.from);
                amounts.push(tip.amount);
                messages.push(tip.message);
                timestamps.push(tip.timestamp);
            }

            Ok((froms, amounts, messages, timestamps))
        }

        /// All tip IDs recorded for `user`, in acceptance order. Empty for
        /// users who never tipped.
        #[ink(message)]
        pub fn user_tip_ids(&self, user: AccountId) -> Vec<u32> {
            self.user_tips.get(user).unwrap_or_default()
        }

        /// Number of tips recorded for `user`.
        #[ink(message)]
        pub fn user_tip_count(&self, user: AccountId) -> u32 {
            self.user_tips
                .get(user)
                .map(|ids| ids.len() as u32)
                .unwrap_or(0)
        }

        /// Current owner.
        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
