// src/validators/campos.rs

// ---
// Validações customizadas para `#[validate(custom(function = "..."))]`
// ---

use rust_decimal::Decimal;
use validator::ValidationError;

use super::{contato, documento};

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

pub fn validar_cpf(val: &str) -> Result<(), ValidationError> {
    if !documento::validate_cpf(val) {
        return Err(field_error("cpf", "CPF inválido."));
    }
    Ok(())
}

pub fn validar_cnpj(val: &str) -> Result<(), ValidationError> {
    if !documento::validate_cnpj(val) {
        return Err(field_error("cnpj", "CNPJ inválido."));
    }
    Ok(())
}

pub fn validar_documento(val: &str) -> Result<(), ValidationError> {
    if !documento::validate_documento(val) {
        return Err(field_error("documento", "Informe um CPF ou CNPJ válido."));
    }
    Ok(())
}

pub fn validar_email(val: &str) -> Result<(), ValidationError> {
    if !contato::validate_email(val) {
        return Err(field_error("email", "O e-mail fornecido é inválido."));
    }
    Ok(())
}

pub fn validar_telefone(val: &str) -> Result<(), ValidationError> {
    if !contato::validate_phone(val) {
        return Err(field_error("telefone", "O telefone deve ter DDD + 8 ou 9 dígitos."));
    }
    Ok(())
}

pub fn validar_senha(val: &str) -> Result<(), ValidationError> {
    if !contato::validate_password(val) {
        let mut err = field_error(
            "senha",
            "A senha deve ter no mínimo 6 caracteres, com letras e números.",
        );
        err.add_param("min".into(), &6);
        return Err(err);
    }
    Ok(())
}

pub fn validar_data(val: &str) -> Result<(), ValidationError> {
    if !contato::validate_date(val) {
        return Err(field_error("data", "Data inválida. Use o formato DD/MM/AAAA."));
    }
    Ok(())
}

pub fn validar_moeda(val: &str) -> Result<(), ValidationError> {
    if !contato::validate_currency(val) {
        return Err(field_error("moeda", "Valor inválido. Use o formato 1.234,56."));
    }
    Ok(())
}

pub fn validar_valor_positivo(val: &Decimal) -> Result<(), ValidationError> {
    if *val <= Decimal::ZERO {
        let mut err = field_error("range", "O valor deve ser maior que zero.");
        err.add_param("min".into(), &0.0);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn messages_and_codes() {
        let err = validar_cpf("111.111.111-11").unwrap_err();
        assert_eq!(err.code, "cpf");
        assert_eq!(err.message.as_deref(), Some("CPF inválido."));

        assert!(validar_cpf("529.982.247-25").is_ok());
        assert!(validar_cnpj("11.222.333/0001-81").is_ok());
        assert!(validar_documento("11.222.333/0001-81").is_ok());
        assert!(validar_documento("529.982.247-25").is_ok());
        assert!(validar_documento("12").is_err());
    }

    #[test]
    fn password_error_carries_min_param() {
        let err = validar_senha("abc").unwrap_err();
        assert!(err.params.contains_key("min"));
    }

    #[test]
    fn positive_amount() {
        assert!(validar_valor_positivo(&dec("0.01")).is_ok());
        assert!(validar_valor_positivo(&dec("0")).is_err());
        assert!(validar_valor_positivo(&dec("-10")).is_err());
    }

    #[test]
    fn contact_fields() {
        assert!(validar_email("a@b.co").is_ok());
        assert!(validar_telefone("(11) 99999-8888").is_ok());
        assert!(validar_data("31/12/2024").is_ok());
        assert!(validar_moeda("1.234,56").is_ok());
        assert!(validar_moeda("1234,56").is_err());
    }
}
