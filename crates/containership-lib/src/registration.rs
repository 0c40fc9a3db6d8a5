//! User registration and credit-limit validation.
//!
//! Independent of the container domain: nothing here touches ships or
//! containers, and nothing there depends on this module. The collaborators a
//! deployment wires in (client directory, credit bureau, clock) sit behind
//! traits so tests can substitute them.

use chrono::{Datelike, NaiveDate};

/// Youngest age (in full years) a user may register at.
pub const MINIMUM_AGE_YEARS: i32 = 21;

/// Smallest credit limit accepted for capped users.
pub const MINIMUM_CREDIT_LIMIT: i64 = 500;

/// Source of today's date. Substituted in tests to pin age calculations.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Client importance tier, driving the credit-limit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientTier {
    VeryImportant,
    Important,
    Standard,
}

/// A client record as returned by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub tier: ClientTier,
}

/// Lookup of client records by identifier.
pub trait ClientDirectory {
    fn client_by_id(&self, id: u64) -> Option<Client>;
}

/// External credit bureau.
pub trait CreditService {
    fn credit_limit(&self, last_name: &str, date_of_birth: NaiveDate) -> i64;
}

/// A registered user. `credit_limit` is `None` for uncapped clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client: Client,
    pub credit_limit: Option<i64>,
}

/// Registration workflow over the wired-in collaborators.
#[derive(Debug)]
pub struct RegistrationService<D, C, K> {
    directory: D,
    credit: C,
    clock: K,
}

impl<D, C, K> RegistrationService<D, C, K>
where
    D: ClientDirectory,
    C: CreditService,
    K: Clock,
{
    pub fn new(directory: D, credit: C, clock: K) -> Self {
        Self {
            directory,
            credit,
            clock,
        }
    }

    /// Register a user, or return `None` when any rule rejects the request:
    /// basic info invalid, client unknown, or a capped credit limit below
    /// [`MINIMUM_CREDIT_LIMIT`].
    pub fn add_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: NaiveDate,
        client_id: u64,
    ) -> Option<User> {
        if !self.validate_basic_user_info(first_name, last_name, email, date_of_birth) {
            return None;
        }

        let client = self.directory.client_by_id(client_id)?;
        let credit_limit = self.assign_credit_limit(last_name, date_of_birth, client.tier);

        if let Some(limit) = credit_limit {
            if limit < MINIMUM_CREDIT_LIMIT {
                return None;
            }
        }

        Some(User {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            date_of_birth,
            client,
            credit_limit,
        })
    }

    /// The basic-info checks: non-empty names, a plausible email, and the
    /// minimum age on today's date.
    pub fn validate_basic_user_info(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: NaiveDate,
    ) -> bool {
        if first_name.is_empty() || last_name.is_empty() {
            return false;
        }
        if !email.contains('@') || !email.contains('.') {
            return false;
        }
        age_on(self.clock.today(), date_of_birth) >= MINIMUM_AGE_YEARS
    }

    /// Tier policy: very important clients are uncapped, important clients get
    /// double the bureau figure, everyone else gets it unchanged.
    fn assign_credit_limit(
        &self,
        last_name: &str,
        date_of_birth: NaiveDate,
        tier: ClientTier,
    ) -> Option<i64> {
        match tier {
            ClientTier::VeryImportant => None,
            ClientTier::Important => Some(2 * self.credit.credit_limit(last_name, date_of_birth)),
            ClientTier::Standard => Some(self.credit.credit_limit(last_name, date_of_birth)),
        }
    }
}

/// Full years between `date_of_birth` and `today`, counting a birthday not yet
/// reached this year as one year less.
fn age_on(today: NaiveDate, date_of_birth: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    struct StubDirectory(Option<Client>);

    impl ClientDirectory for StubDirectory {
        fn client_by_id(&self, _id: u64) -> Option<Client> {
            self.0.clone()
        }
    }

    struct StubCredit(i64);

    impl CreditService for StubCredit {
        fn credit_limit(&self, _last_name: &str, _date_of_birth: NaiveDate) -> i64 {
            self.0
        }
    }

    fn client(tier: ClientTier) -> Client {
        Client {
            id: 1,
            name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            address: "123 Main St".to_string(),
            tier,
        }
    }

    fn service(
        client: Option<Client>,
        credit: i64,
    ) -> RegistrationService<StubDirectory, StubCredit, FixedClock> {
        RegistrationService::new(
            StubDirectory(client),
            StubCredit(credit),
            FixedClock(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
        )
    }

    fn dob(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
    }

    #[test]
    fn invalid_basic_info_rejects_the_user() {
        let service = service(Some(client(ClientTier::Standard)), 600);
        let cases = [
            ("", "Surname", "email@mail.com", dob(1990)),
            ("Name", "", "email@mail.com", dob(1990)),
            ("Name", "Surname", "email", dob(1990)),
            ("Name", "Surname", "mail.com", dob(1990)),
            ("Name", "Surname", "email@mail.com", dob(2005)),
        ];
        for (first, last, email, birth) in cases {
            assert!(service.add_user(first, last, email, birth, 1).is_none());
        }
    }

    #[test]
    fn age_counts_unreached_birthdays_correctly() {
        let service = service(Some(client(ClientTier::Standard)), 600);
        let not_yet_21 = NaiveDate::from_ymd_opt(2000, 1, 2).unwrap();
        assert!(!service.validate_basic_user_info("Name", "Surname", "email@mail.com", not_yet_21));
        let just_21 = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert!(service.validate_basic_user_info("Name", "Surname", "email@mail.com", just_21));
    }

    #[test]
    fn unknown_client_rejects_the_user() {
        let service = service(None, 600);
        assert!(service
            .add_user("Name", "Surname", "email@mail.com", dob(1990), 1)
            .is_none());
    }

    #[test]
    fn capped_limit_below_minimum_rejects_the_user() {
        let service = service(Some(client(ClientTier::Standard)), 499);
        assert!(service
            .add_user("Name", "Surname", "email@mail.com", dob(1990), 1)
            .is_none());
    }

    #[test]
    fn standard_client_keeps_the_bureau_figure() {
        let service = service(Some(client(ClientTier::Standard)), 500);
        let user = service
            .add_user("Name", "Surname", "email@mail.com", dob(1990), 1)
            .expect("registration succeeds");
        assert_eq!(user.credit_limit, Some(500));
    }

    #[test]
    fn important_client_doubles_the_bureau_figure() {
        let service = service(Some(client(ClientTier::Important)), 300);
        let user = service
            .add_user("Name", "Surname", "email@mail.com", dob(1990), 1)
            .expect("registration succeeds");
        assert_eq!(user.credit_limit, Some(600));
    }

    #[test]
    fn very_important_client_is_uncapped_regardless_of_bureau_figure() {
        let service = service(Some(client(ClientTier::VeryImportant)), 0);
        let user = service
            .add_user("Name", "Surname", "email@mail.com", dob(1990), 1)
            .expect("registration succeeds");
        assert_eq!(user.credit_limit, None);
    }
}
