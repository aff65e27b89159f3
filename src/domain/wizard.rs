use crate::domain::catalog::{AddOn, Catalog, Package};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four screens of the booking wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Package,
    AddOns,
    Details,
    Payment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

impl CustomerInfo {
    /// Every field except notes is required.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.date.trim().is_empty()
            && !self.time.trim().is_empty()
            && !self.location.trim().is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("select a package before continuing")]
    NoPackageSelected,
    #[error("please fill out all required fields")]
    IncompleteDetails,
}

/// In-progress booking. Owned state: selections mutate it in place and
/// every mutation recomputes the derived prices, while step transitions
/// consume the draft and hand back a validated one.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    step: Step,
    selected_package: Option<Package>,
    selected_add_ons: Vec<AddOn>,
    pub customer_info: CustomerInfo,
    total_price: u32,
    deposit_price: u32,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingDraft {
    pub fn new() -> Self {
        Self {
            step: Step::Package,
            selected_package: None,
            selected_add_ons: Vec::new(),
            customer_info: CustomerInfo::default(),
            total_price: 0,
            deposit_price: 0,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selected_package(&self) -> Option<&Package> {
        self.selected_package.as_ref()
    }

    pub fn selected_add_ons(&self) -> &[AddOn] {
        &self.selected_add_ons
    }

    pub fn total_price(&self) -> u32 {
        self.total_price
    }

    pub fn deposit_price(&self) -> u32 {
        self.deposit_price
    }

    /// Sets the sole selected package, replacing any prior choice.
    pub fn select_package(&mut self, package: Package) {
        self.selected_package = Some(package);
        self.recompute();
    }

    /// Adds the add-on if absent, removes it if present.
    pub fn toggle_add_on(&mut self, add_on: AddOn) {
        match self.selected_add_ons.iter().position(|a| a.id == add_on.id) {
            Some(index) => {
                self.selected_add_ons.remove(index);
            }
            None => self.selected_add_ons.push(add_on),
        }
        self.recompute();
    }

    /// Toggle by catalog id. An id the catalog does not know is a no-op.
    pub fn toggle_add_on_by_id(&mut self, catalog: &Catalog, id: &str) {
        if let Some(add_on) = catalog.add_on(id) {
            self.toggle_add_on(add_on.clone());
        }
    }

    /// Moves the wizard to `target`. Regressing is always allowed; moving
    /// forward past the package screen needs a selection, and reaching the
    /// payment screen needs a complete customer form.
    pub fn go_to_step(mut self, target: Step) -> Result<Self, WizardError> {
        if target > self.step {
            if target >= Step::AddOns && self.selected_package.is_none() {
                return Err(WizardError::NoPackageSelected);
            }
            if target >= Step::Payment && !self.customer_info.is_complete() {
                return Err(WizardError::IncompleteDetails);
            }
        }
        self.step = target;
        Ok(self)
    }

    fn recompute(&mut self) {
        let package_price = self.selected_package.as_ref().map(|p| p.price).unwrap_or(0);
        let add_ons_price: u32 = self.selected_add_ons.iter().map(|a| a.price).sum();

        self.total_price = package_price + add_ons_price;
        // Half the total, rounded half-up: a $251 total owes a $126 deposit.
        self.deposit_price = (self.total_price + 1) / 2;
    }
}
