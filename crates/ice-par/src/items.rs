//! Declaration parsing - classes, functions, properties, typed variables.

use ice_lex::TokenKind;
use ice_util::SyntaxError;

use crate::ast::*;
use crate::Parser;

impl Parser {
    /// Parses one declaration-or-statement.
    ///
    /// Declarations begin with `kelas`, `tugas`/`fungsi`, or one of the four
    /// type keywords; anything else falls through to `statement`.
    pub(crate) fn declaration(&mut self) -> Result<Stmt, SyntaxError> {
        if self.match_token(TokenKind::Kelas) {
            return self.class_declaration();
        }
        if self.match_any(&[TokenKind::Tugas, TokenKind::Fungsi]) {
            return Ok(Stmt::Function(self.function_declaration()?));
        }
        if self.match_any(&[
            TokenKind::Bilangan,
            TokenKind::Desimal,
            TokenKind::Teks,
            TokenKind::Boolean,
        ]) {
            return self.var_declaration();
        }
        self.statement()
    }

    /// Parses the remainder of a typed variable declaration.
    ///
    /// The type keyword has already been consumed; it only disambiguates the
    /// declaration from an expression statement and is not checked at
    /// runtime.
    fn var_declaration(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self
            .consume(TokenKind::Ident, "Nama variabel diharapkan.")?
            .lexeme
            .clone();
        let init = if self.match_token(TokenKind::Eq) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(
            TokenKind::Semicolon,
            "Titik koma ';' diharapkan setelah deklarasi variabel.",
        )?;
        Ok(Stmt::VarDecl(VarDecl { name, init }))
    }

    /// Parses a function declaration after its `tugas`/`fungsi` keyword.
    pub(crate) fn function_declaration(&mut self) -> Result<FunctionDecl, SyntaxError> {
        let name = self
            .consume(TokenKind::Ident, "Nama fungsi diharapkan.")?
            .lexeme
            .clone();
        self.consume(TokenKind::LParen, "Diharapkan '(' setelah nama fungsi.")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                let param = self
                    .consume(TokenKind::Ident, "Nama parameter diharapkan.")?
                    .lexeme
                    .clone();
                params.push(param);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RParen, "Diharapkan ')' setelah parameter.")?;

        let body = self.block()?;
        Ok(FunctionDecl { name, params, body })
    }

    /// Parses a class declaration after the `kelas` keyword.
    ///
    /// Grammar: `kelas Nama [: Super] '{' anggota* '}'` where each member is
    /// a `tugas`/`fungsi` function or a `properti` declaration.
    fn class_declaration(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self
            .consume(TokenKind::Ident, "Nama kelas diharapkan.")?
            .lexeme
            .clone();

        let superclass = if self.match_token(TokenKind::Colon) {
            Some(
                self.consume(TokenKind::Ident, "Nama superclass diharapkan setelah ':'.")?
                    .lexeme
                    .clone(),
            )
        } else {
            None
        };

        self.consume(TokenKind::LBrace, "Diharapkan '{' untuk memulai isi kelas.")?;

        let mut members = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if self.match_any(&[TokenKind::Tugas, TokenKind::Fungsi]) {
                members.push(ClassMember::Method(self.function_declaration()?));
            } else if self.match_token(TokenKind::Properti) {
                members.push(ClassMember::Property(self.property_declaration()?));
            } else {
                return Err(self.error_at_current(
                    "Hanya 'tugas' atau 'properti' yang diperbolehkan di dalam kelas.",
                ));
            }
        }
        self.consume(TokenKind::RBrace, "Diharapkan '}' untuk menutup kelas.")?;

        Ok(Stmt::Class(ClassDecl {
            name,
            superclass,
            members,
        }))
    }

    /// Parses a property declaration after the `properti` keyword.
    ///
    /// Either accessor may appear, in any order, at most once each; at least
    /// one is required.
    fn property_declaration(&mut self) -> Result<PropertyDecl, SyntaxError> {
        let name = self
            .consume(TokenKind::Ident, "Nama properti diharapkan.")?
            .lexeme
            .clone();
        self.consume(
            TokenKind::LBrace,
            "Diharapkan '{' untuk memulai isi properti.",
        )?;

        let mut getter = None;
        let mut setter = None;
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if self.match_token(TokenKind::Get) {
                if getter.is_some() {
                    return Err(self.error_at_previous("Accessor 'get' ganda."));
                }
                getter = Some(self.block()?);
            } else if self.match_token(TokenKind::Set) {
                if setter.is_some() {
                    return Err(self.error_at_previous("Accessor 'set' ganda."));
                }
                self.consume(TokenKind::LParen, "Diharapkan '(' setelah 'set'.")?;
                let param = if self.check(TokenKind::Ident) {
                    Some(self.advance().lexeme.clone())
                } else {
                    None
                };
                self.consume(TokenKind::RParen, "Diharapkan ')' setelah parameter set.")?;
                let body = self.block()?;
                setter = Some(SetterDecl { param, body });
            } else {
                return Err(
                    self.error_at_current("Diharapkan 'get' atau 'set' di dalam properti.")
                );
            }
        }

        if getter.is_none() && setter.is_none() {
            return Err(self.error_at_current("Properti membutuhkan accessor 'get' atau 'set'."));
        }
        self.consume(TokenKind::RBrace, "Diharapkan '}' untuk menutup properti.")?;

        Ok(PropertyDecl {
            name,
            getter,
            setter,
        })
    }
}
