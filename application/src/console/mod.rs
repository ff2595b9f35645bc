//! Interactive [`Console`] of the travel agency.

pub mod error;
mod prompt;

use std::io::{self, BufRead, Write};

use common::Date;
use service::{
    command::{
        record_payment::{self, Outcome},
        AddItineraryItem, CancelBooking, CreateBooking, CreateCustomer,
        CreateTourPackage, RecordPayment,
    },
    domain::{booking, package, TourPackage},
    query, Command as _,
};
use tracing as log;

use crate::{AsError as _, Error, Service};

use self::error::{BookingError, CustomerError, PackageError, PaymentError};

pub use self::prompt::Prompt;

/// Menu-driven console operating the [`Service`].
#[derive(Debug)]
pub struct Console<R, W> {
    /// [`Service`] executing the operator's actions.
    service: Service,

    /// [`Prompt`] talking to the operator.
    prompt: Prompt<R, W>,

    /// Source of the current [`Date`].
    today: fn() -> Date,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a new [`Console`] over the provided `input` and `output`.
    #[must_use]
    pub fn new(service: Service, input: R, output: W) -> Self {
        Self::with_today(service, input, output, Date::today)
    }

    /// Creates a new [`Console`] taking the current [`Date`] from the
    /// provided `today` function.
    #[must_use]
    pub fn with_today(
        service: Service,
        input: R,
        output: W,
        today: fn() -> Date,
    ) -> Self {
        Self {
            service,
            prompt: Prompt::new(input, output),
            today,
        }
    }

    /// Runs the menu loop until the operator exits.
    ///
    /// # Errors
    ///
    /// If failed to talk to the operator.
    /// [`io::ErrorKind::UnexpectedEof`] is returned once the input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.menu()?;
            match self.prompt.int::<i64>("Choose an option: ")? {
                1 => self.add_tour_package().await?,
                2 => self.add_itinerary_item().await?,
                3 => self.add_customer().await?,
                4 => self.create_booking().await?,
                5 => self.record_payment().await?,
                6 => self.cancel_booking().await?,
                7 => self.display_packages().await?,
                8 => return self.prompt.say("Exiting... Goodbye"),
                _ => self.prompt.say("Invalid choice. Try again.")?,
            }
        }
    }

    /// Prints the menu.
    fn menu(&mut self) -> io::Result<()> {
        for line in [
            "\n=== Travel Agency Menu ===",
            "1. Add Tour Package",
            "2. Add Itinerary Item",
            "3. Add Customer",
            "4. Create Booking",
            "5. Record Payment",
            "6. Cancel Booking",
            "7. Display Packages & Availability",
            "8. Exit",
        ] {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    /// Prints the provided [`Error`] to the operator.
    fn report(&mut self, err: Error) -> io::Result<()> {
        log::debug!("{err}");
        self.prompt.say(err.message)
    }

    #[tracing::instrument(skip_all)]
    async fn add_tour_package(&mut self) -> io::Result<()> {
        let p = &mut self.prompt;
        p.say("\n-- Add Tour Package --")?;
        let name = p.text("Name: ", "Name is too long.")?;
        let description = p.text("Description: ", "Description is too long.")?;
        let starts_on = p.date("Start date (yyyy-MM-dd): ")?;
        let mut ends_on = p.date("End date (yyyy-MM-dd): ")?;
        while ends_on < starts_on {
            p.say("End date must be after start date.")?;
            ends_on = p.date("End date (yyyy-MM-dd): ")?;
        }
        let price = p.amount("Price per person: ")?;
        let total_seats = p.int("Total seats: ")?;

        let res = self
            .service
            .execute(CreateTourPackage {
                name,
                description,
                starts_on: starts_on.coerce(),
                ends_on: ends_on.coerce(),
                price,
                total_seats,
            })
            .await;
        match res {
            Ok(package) => self
                .prompt
                .say(format_args!("Package added with ID: {}", package.id)),
            Err(e) => self.report(e.into_error()),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn add_itinerary_item(&mut self) -> io::Result<()> {
        self.prompt.say("\n-- Add Itinerary Item --")?;
        let package_id: package::Id = self.prompt.int("Package ID: ")?;
        if self.package(package_id).await?.is_none() {
            return Ok(());
        }

        let p = &mut self.prompt;
        let day = p.int("Day number for this item: ")?;
        let title = p.text("Title: ", "Title is too long.")?;
        let details = p.text("Details: ", "Details are too long.")?;

        let res = self
            .service
            .execute(AddItineraryItem {
                package_id,
                day,
                title,
                details,
            })
            .await;
        match res {
            Ok(_) => self.prompt.say(format_args!(
                "Itinerary item added to package {package_id}",
            )),
            Err(e) => self.report(e.into_error()),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn add_customer(&mut self) -> io::Result<()> {
        let p = &mut self.prompt;
        p.say("\n-- Add Customer --")?;
        let name = p.text("Name: ", "Name is too long.")?;
        let email = p.text("Email: ", "Invalid email. Try again.")?;
        let phone = p.text("Phone: ", "Invalid phone. Try again.")?;

        let res = self
            .service
            .execute(CreateCustomer { name, email, phone })
            .await;
        match res {
            Ok(customer) => self
                .prompt
                .say(format_args!("Customer added with ID: {}", customer.id)),
            Err(e) => self.report(e.into_error()),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn create_booking(&mut self) -> io::Result<()> {
        self.prompt.say("\n-- Create Booking --")?;
        let customer_id = self.prompt.int("Customer ID: ")?;
        match self
            .service
            .execute(query::customer::ById::by(customer_id))
            .await
        {
            Ok(Some(_)) => {}
            Ok(None) => return self.report(CustomerError::NotFound.into()),
            Err(e) => return self.report(e.into_error()),
        }
        let package_id = self.prompt.int("Package ID: ")?;
        let Some(package) = self.package(package_id).await? else {
            return Ok(());
        };

        let seats = self.prompt.int::<i64>("Number of seats to book: ")?;
        let Some(seats) = usize::try_from(seats).ok().filter(|n| *n > 0)
        else {
            return self.report(BookingError::InvalidSeatCount.into());
        };
        let available = package.available_seats();
        if usize::from(available) < seats {
            return self.report(error::insufficient_seats(available));
        }

        let mut travelers = Vec::with_capacity(seats);
        for i in 1..=seats {
            let p = &mut self.prompt;
            p.say(format_args!("Enter traveler {i} details:"))?;
            travelers.push(booking::Traveler {
                name: p.text("  Name: ", "Name is too long.")?,
                age: p.int("  Age: ")?,
                passport: p.optional(
                    "  Passport (or press enter): ",
                    "Passport is too long.",
                )?,
            });
        }

        let res = self
            .service
            .execute(CreateBooking {
                customer_id,
                package_id,
                travelers,
                booked_on: (self.today)().coerce(),
            })
            .await;
        match res {
            Ok(b) => self.prompt.say(format_args!(
                "Booking created with ID: {}. Status: {}. Amount due: {}",
                b.id,
                b.status(),
                b.amount_due(),
            )),
            Err(e) => self.report(e.into_error()),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn record_payment(&mut self) -> io::Result<()> {
        self.prompt.say("\n-- Record Payment --")?;
        let booking_id = self.prompt.int("Booking ID: ")?;
        match self
            .service
            .execute(query::booking::ById::by(booking_id))
            .await
        {
            Ok(Some(_)) => {}
            Ok(None) => return self.report(BookingError::NotFound.into()),
            Err(e) => return self.report(e.into_error()),
        }
        let amount = self.prompt.amount("Amount to pay: ")?;
        if !amount.is_positive() {
            return self.report(PaymentError::InvalidAmount.into());
        }
        let method = self.prompt.text(
            "Payment method (Cash/Card/UPI): ",
            "Payment method is too long.",
        )?;

        let res = self
            .service
            .execute(RecordPayment {
                booking_id,
                amount,
                method,
                paid_on: (self.today)().coerce(),
            })
            .await;
        let record_payment::Output {
            payment,
            booking,
            outcome,
        } = match res {
            Ok(out) => out,
            Err(e) => return self.report(e.into_error()),
        };

        self.prompt.say(format_args!(
            "Payment recorded. Receipt -> Payment ID: {}, Amount: {}",
            payment.id, payment.amount,
        ))?;
        match outcome {
            Outcome::Confirmed => self.prompt.say(format_args!(
                "Booking {} is CONFIRMED. Seats reserved: {}",
                booking.id,
                booking.num_seats(),
            )),
            Outcome::AlreadyConfirmed => self.prompt.say(format_args!(
                "Booking {} is already CONFIRMED.",
                booking.id,
            )),
            Outcome::Oversold => self.prompt.say(
                "Payment complete but seats are no longer available. \
                 Contact support.",
            ),
            Outcome::Pending { remaining } => self.prompt.say(format_args!(
                "Booking still PENDING. Remaining due: {remaining}",
            )),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn cancel_booking(&mut self) -> io::Result<()> {
        self.prompt.say("\n-- Cancel Booking --")?;
        let booking_id = self.prompt.int("Booking ID: ")?;

        let res = self
            .service
            .execute(CancelBooking {
                booking_id,
                cancelled_on: (self.today)().coerce(),
            })
            .await;
        match res {
            Ok(c) => self.prompt.say(format_args!(
                "Cancellation complete. Fee: {}, Refund: {}",
                c.fee, c.refund,
            )),
            Err(e) => self.report(e.into_error()),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn display_packages(&mut self) -> io::Result<()> {
        self.prompt.say("\n-- Packages & Availability --")?;
        let packages =
            match self.service.execute(query::tour_packages::All::by(())).await
            {
                Ok(packages) => packages,
                Err(e) => return self.report(e.into_error()),
            };
        if packages.is_empty() {
            return self.prompt.say("No packages.");
        }

        for package in packages {
            self.prompt.say(format_args!(
                "ID:{} | {} | {} to {} | Price: {} | Seats: {}/{}",
                package.id,
                package.name,
                package.starts_on,
                package.ends_on,
                package.price,
                package.available_seats(),
                package.total_seats(),
            ))?;
            if !package.itinerary().is_empty() {
                self.prompt.say("  Itinerary:")?;
            }
            for item in package.itinerary() {
                self.prompt.say(format_args!(
                    "    Day {}: {} - {}",
                    item.day, item.title, item.details,
                ))?;
            }
        }
        Ok(())
    }

    /// Looks up the [`TourPackage`] by its ID, reporting it to the operator
    /// if it's missing.
    async fn package(
        &mut self,
        id: package::Id,
    ) -> io::Result<Option<TourPackage>> {
        match self.service.execute(query::tour_package::ById::by(id)).await {
            Ok(Some(package)) => Ok(Some(package)),
            Ok(None) => {
                self.report(PackageError::NotFound.into()).map(|()| None)
            }
            Err(e) => self.report(e.into_error()).map(|()| None),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Date;
    use service::infra::Memory;

    use crate::Service;

    use super::Console;

    fn today() -> Date {
        Date::parse("2024-06-01").unwrap()
    }

    async fn run(script: &str) -> String {
        let service = Service::new(service::Config::default(), Memory::new());
        let mut out = Vec::new();

        Console::with_today(service, script.as_bytes(), &mut out, today)
            .run()
            .await
            .unwrap();

        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn walks_booking_lifecycle() {
        let out = run("1\nAlps\nHiking week\n2024-07-01\n2024-06-20\n\
             2024-07-07\n100\n2\n\
             2\n1\n1\nArrival\nMeet at the hotel\n\
             3\nJohn Doe\njohn@example.com\n+1 555 0100\n\
             4\n1\n1\n1\nJohn Doe\n30\n\n\
             5\n1\n50\nCard\n\
             5\n1\n50\nCash\n\
             5\n1\n10\nCash\n\
             7\n\
             6\n1\n\
             6\n1\n\
             8\n")
        .await;

        for expected in [
            "End date must be after start date.",
            "Package added with ID: 1",
            "Itinerary item added to package 1",
            "Customer added with ID: 1",
            "Booking created with ID: 1. Status: PENDING. \
             Amount due: 100.00",
            "Payment recorded. Receipt -> Payment ID: 1, Amount: 50.00",
            "Booking still PENDING. Remaining due: 50.00",
            "Booking 1 is CONFIRMED. Seats reserved: 1",
            "Booking 1 is already CONFIRMED.",
            "ID:1 | Alps | 2024-07-01 to 2024-07-07 | Price: 100.00 | \
             Seats: 1/2",
            "    Day 1: Arrival - Meet at the hotel",
            "Cancellation complete. Fee: 11.00, Refund: 99.00",
            "Booking already cancelled.",
            "Exiting... Goodbye",
        ] {
            assert!(out.contains(expected), "`{expected}` missing in:\n{out}");
        }
    }

    #[tokio::test]
    async fn reports_missing_entities() {
        let out = run("2\n7\n4\n1\n5\n3\n6\n4\n7\n9\n8\n").await;

        for expected in [
            "Package not found.",
            "Customer not found.",
            "Booking not found.",
            "No packages.",
            "Invalid choice. Try again.",
        ] {
            assert!(out.contains(expected), "`{expected}` missing in:\n{out}");
        }
    }

    #[tokio::test]
    async fn rejects_overbooking() {
        let out = run("1\nAlps\nHiking\n2024-07-01\n2024-07-07\n100\n1\n\
             3\nJane\njane@example.com\n5550100100\n\
             4\n1\n1\n2\n\
             4\n1\n1\n0\n\
             8\n")
        .await;

        assert!(out.contains("Not enough seats available. Available: 1"));
        assert!(out.contains("Seats must be positive."));
    }

    #[tokio::test]
    async fn ends_with_input() {
        let service = Service::new(service::Config::default(), Memory::new());
        let mut out = Vec::new();

        let err = Console::with_today(service, &b"7\n"[..], &mut out, today)
            .run()
            .await
            .unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
