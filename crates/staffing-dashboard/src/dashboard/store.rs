use super::domain::{Employee, EmployeeId, HiringId, HiringRecord};

/// Error enumeration for record store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("employee {0} already exists")]
    Conflict(EmployeeId),
    #[error("record not found")]
    NotFound,
}

/// Session-scoped, ordered record lists owned by the dashboard controller.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    employees: Vec<Employee>,
    hiring: Vec<HiringRecord>,
    next_hiring_id: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the built-in resourcing and requisition fixtures.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for employee in super::fixtures::employees() {
            // fixture ids are unique
            let _ = store.insert_employee(employee);
        }
        for requisition in super::fixtures::hiring() {
            store.insert_hiring(requisition);
        }
        store
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn hiring(&self) -> &[HiringRecord] {
        &self.hiring
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.emp_id == id)
    }

    pub fn hiring_record(&self, id: HiringId) -> Option<&HiringRecord> {
        self.hiring.iter().find(|record| record.id == id)
    }

    /// Current zero-based display position of a requisition.
    pub fn hiring_position(&self, id: HiringId) -> Option<usize> {
        self.hiring.iter().position(|record| record.id == id)
    }

    pub fn contains_employee(&self, id: EmployeeId) -> bool {
        self.employee(id).is_some()
    }

    pub fn insert_employee(&mut self, employee: Employee) -> Result<(), StoreError> {
        if self.contains_employee(employee.emp_id) {
            return Err(StoreError::Conflict(employee.emp_id));
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Appends a requisition, overwriting whatever id it carried with a fresh synthetic one.
    pub fn insert_hiring(&mut self, mut record: HiringRecord) -> HiringId {
        self.next_hiring_id += 1;
        let id = HiringId(self.next_hiring_id);
        record.id = id;
        self.hiring.push(record);
        id
    }

    pub fn replace_employee(&mut self, employee: Employee) -> Result<(), StoreError> {
        let slot = self
            .employees
            .iter_mut()
            .find(|existing| existing.emp_id == employee.emp_id)
            .ok_or(StoreError::NotFound)?;
        *slot = employee;
        Ok(())
    }

    pub fn replace_hiring(&mut self, record: HiringRecord) -> Result<(), StoreError> {
        let slot = self
            .hiring
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or(StoreError::NotFound)?;
        *slot = record;
        Ok(())
    }

    pub fn remove_employee(&mut self, id: EmployeeId) -> Option<Employee> {
        let position = self.employees.iter().position(|employee| employee.emp_id == id)?;
        Some(self.employees.remove(position))
    }

    pub fn remove_hiring(&mut self, id: HiringId) -> Option<HiringRecord> {
        let position = self.hiring_position(id)?;
        Some(self.hiring.remove(position))
    }

    pub fn employee_ids(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.employees.iter().map(|employee| employee.emp_id)
    }

    pub fn hiring_ids(&self) -> impl Iterator<Item = HiringId> + '_ {
        self.hiring.iter().map(|record| record.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures;

    #[test]
    fn hiring_ids_are_never_reused() {
        let mut store = RecordStore::new();
        let requisitions = fixtures::hiring();
        let first = store.insert_hiring(requisitions[0].clone());
        let second = store.insert_hiring(requisitions[1].clone());
        assert_eq!((first, second), (HiringId(1), HiringId(2)));

        assert!(store.remove_hiring(second).is_some());
        let third = store.insert_hiring(requisitions[2].clone());
        assert_eq!(third, HiringId(3));
        assert_eq!(store.hiring_ids().collect::<Vec<_>>(), vec![first, third]);
    }

    #[test]
    fn removal_shifts_positions_but_not_ids() {
        let mut store = RecordStore::seeded();
        let ids: Vec<HiringId> = store.hiring_ids().collect();
        store.remove_hiring(ids[2]);

        assert_eq!(store.hiring_position(ids[3]), Some(2));
        assert_eq!(store.hiring_record(ids[3]).map(|record| record.id), Some(ids[3]));
        assert_eq!(store.hiring().len(), ids.len() - 1);
    }

    #[test]
    fn duplicate_employee_ids_conflict() {
        let mut store = RecordStore::seeded();
        let existing = store.employees()[0].clone();
        assert_eq!(
            store.insert_employee(existing.clone()),
            Err(StoreError::Conflict(existing.emp_id))
        );
        assert_eq!(store.employee_ids().count(), fixtures::EMPLOYEE_FIXTURE_COUNT);
    }

    #[test]
    fn replacing_unknown_records_is_not_found() {
        let mut store = RecordStore::new();
        let mut record = fixtures::hiring().remove(0);
        record.id = HiringId(42);
        assert_eq!(store.replace_hiring(record), Err(StoreError::NotFound));
        assert_eq!(
            store.replace_employee(fixtures::employees().remove(0)),
            Err(StoreError::NotFound)
        );
        assert!(store.remove_employee(EmployeeId(1)).is_none());
    }
}
