//! Entry form requests.

use std::fmt;
use std::str::FromStr;

use labeldesk_catalog::NewProduct;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    InventoryNumber,
    ProductName,
    Brand,
    Model,
    EquipmentType,
    SerialNumber,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::InventoryNumber,
        FormField::ProductName,
        FormField::Brand,
        FormField::Model,
        FormField::EquipmentType,
        FormField::SerialNumber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::InventoryNumber => "inventory_number",
            FormField::ProductName => "product_name",
            FormField::Brand => "brand",
            FormField::Model => "model",
            FormField::EquipmentType => "equipment_type",
            FormField::SerialNumber => "serial_number",
        }
    }

    pub fn apply(self, draft: &mut NewProduct, value: &str) {
        let optional = || Some(value.to_string()).filter(|v| !v.is_empty());
        match self {
            FormField::InventoryNumber => draft.inventory_number = value.to_string(),
            FormField::ProductName => draft.product_name = value.to_string(),
            FormField::Brand => draft.brand = optional(),
            FormField::Model => draft.model = optional(),
            FormField::EquipmentType => draft.equipment_type = optional(),
            FormField::SerialNumber => draft.serial_number = optional(),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace('-', "_").to_lowercase();
        match key.as_str() {
            "inventory" | "key" => return Ok(FormField::InventoryNumber),
            "name" => return Ok(FormField::ProductName),
            "type" => return Ok(FormField::EquipmentType),
            "serial" => return Ok(FormField::SerialNumber),
            _ => {}
        }
        FormField::ALL
            .into_iter()
            .find(|f| f.name() == key)
            .ok_or_else(|| format!("unknown field {:?}", s))
    }
}

/// Edit one field of the entry form.
#[derive(Debug, Clone)]
pub struct UpdateFieldReq {
    pub field: FormField,
    pub value: String,
}

impl UpdateFieldReq {
    pub const PATH: &'static str = "catalog/add-form/field";
}

/// Submit the entry form.
#[derive(Debug, Clone)]
pub struct SubmitProductReq;

impl SubmitProductReq {
    pub const PATH: &'static str = "catalog/add-form/submit";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_and_aliases() {
        assert_eq!("product_name".parse::<FormField>(), Ok(FormField::ProductName));
        assert_eq!("Equipment-Type".parse::<FormField>(), Ok(FormField::EquipmentType));
        assert_eq!("serial".parse::<FormField>(), Ok(FormField::SerialNumber));
        assert!("color".parse::<FormField>().is_err());
    }

    #[test]
    fn blank_optional_value_clears_field() {
        let mut draft = NewProduct::new("A1", "Laptop");
        FormField::Brand.apply(&mut draft, "Lenovo");
        assert_eq!(draft.brand.as_deref(), Some("Lenovo"));
        FormField::Brand.apply(&mut draft, "");
        assert_eq!(draft.brand, None);
    }
}
