use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

/// Whether a PDA already carries a record of this program.
///
/// A PDA can only become program owned or gain data through this program
/// signing for it, so either condition means a record lives there.
pub fn is_occupied(account: &AccountInfo) -> bool {
    account.owner == &crate::ID || !account.data_is_empty()
}

/// Create a rent-exempt, program-owned PDA with `space` bytes of data
///
/// Handles PDAs that were pre-funded by a third party: a plain
/// `create_account` fails on any account holding lamports, so those are
/// topped up, allocated and assigned instead.
pub fn create_program_account<'a>(
    payer: AccountInfo<'a>,
    account: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required_lamports = Rent::get()?.minimum_balance(space);
    let current_lamports = account.lamports();

    if current_lamports == 0 {
        let cpi_accounts = CreateAccount {
            from: payer,
            to: account,
        };
        return create_account(
            CpiContext::new_with_signer(system_program, cpi_accounts, signer_seeds),
            required_lamports,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = required_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        let cpi_accounts = Transfer {
            from: payer,
            to: account.clone(),
        };
        transfer(CpiContext::new(system_program.clone(), cpi_accounts), top_up)?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program,
            Assign {
                account_to_assign: account,
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}

/// Serialize an Anchor account record, discriminator included, into a
/// freshly created account
pub fn write_record<T: AccountSerialize>(account: &AccountInfo, record: &T) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}

/// Close a program-owned account, moving its lamports to `destination`
///
/// The account is handed back to the system program with empty data so the
/// same PDA can be created again later.
pub fn close_program_account<'a>(
    account: AccountInfo<'a>,
    destination: AccountInfo<'a>,
) -> Result<()> {
    let closing_lamports = account.lamports();
    let destination_lamports = destination.lamports();

    **destination.try_borrow_mut_lamports()? = destination_lamports
        .checked_add(closing_lamports)
        .ok_or(crate::error::LimitedClaimError::ArithmeticOverflow)?;
    **account.try_borrow_mut_lamports()? = 0;

    account.assign(&anchor_lang::system_program::ID);
    account.realloc(0, false)?;
    Ok(())
}
