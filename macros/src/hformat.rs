use hostkit_core::Template;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Expr, LitStr, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

pub struct FormatInput {
    pub template: LitStr,
    pub args: Vec<Expr>,
}

impl Parse for FormatInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let template = input.parse()?;
        let mut args = Vec::new();

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let rest: Punctuated<Expr, Token![,]> = Punctuated::parse_terminated(input)?;
            args.extend(rest);
        } else if !input.is_empty() {
            return Err(input.error("expected `,` after format template"));
        }

        Ok(Self { template, args })
    }
}

pub fn expand(input: FormatInput) -> syn::Result<TokenStream> {
    let FormatInput { template, args } = input;
    let source = template.value();

    let parsed = Template::parse(&source).map_err(|err| syn::Error::new(template.span(), err))?;

    if !parsed.has_named() && parsed.positional_count() > args.len() {
        return Err(syn::Error::new(
            template.span(),
            format!(
                "too few parameters for format: template has {} directives, {} arguments given",
                parsed.positional_count(),
                args.len()
            ),
        ));
    }

    Ok(quote! {
        ::hostkit::format(#template, &[#(::hostkit::Value::from(#args)),*])
    })
}
