use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::TeacherId).big_integer().null())
                    .col(ColumnDef::new(Courses::StartDate).date().not_null())
                    .col(ColumnDef::new(Courses::EndDate).date().null())
                    .col(
                        ColumnDef::new(Courses::DurationHours)
                            .double()
                            .not_null()
                            .default(1.0),
                    )
                    .col(
                        ColumnDef::new(Courses::State)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(Courses::Color)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::StudentCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(ColumnDef::new(Students::FullName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::BirthDate).date().null())
                    .col(ColumnDef::new(Students::EnrollmentDate).date().null())
                    .col(
                        ColumnDef::new(Students::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程学生关联表（选课）
        manager
            .create_table(
                Table::create()
                    .table(CourseStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseStudents::Table, CourseStudents::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseStudents::Table, CourseStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendances::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendances::Name).string().null())
                    .col(
                        ColumnDef::new(Attendances::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendances::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendances::Date).date().not_null())
                    // 开始/结束时间为毫秒时间戳
                    .col(
                        ColumnDef::new(Attendances::StartTime)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendances::EndTime).big_integer().null())
                    .col(
                        ColumnDef::new(Attendances::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(Attendances::IsPresent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Attendances::Notes).text().null())
                    .col(
                        ColumnDef::new(Attendances::Duration)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Attendances::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendances::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 唯一索引：同一学生同一课程只选一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_course_students_course_student")
                    .table(CourseStudents::Table)
                    .col(CourseStudents::CourseId)
                    .col(CourseStudents::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 唯一索引：每个学生每门课程每天只有一条考勤
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_attendances_course_student_date")
                    .table(Attendances::Table)
                    .col(Attendances::CourseId)
                    .col(Attendances::StudentId)
                    .col(Attendances::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_students_student_id")
                    .table(CourseStudents::Table)
                    .col(CourseStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendances_student_id")
                    .table(Attendances::Table)
                    .col(Attendances::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Attendances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Code,
    Description,
    TeacherId,
    StartDate,
    EndDate,
    DurationHours,
    State,
    Color,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    StudentCode,
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    BirthDate,
    EnrollmentDate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseStudents {
    #[sea_orm(iden = "course_students")]
    Table,
    Id,
    CourseId,
    StudentId,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum Attendances {
    #[sea_orm(iden = "attendances")]
    Table,
    Id,
    Name,
    CourseId,
    StudentId,
    Date,
    StartTime,
    EndTime,
    Status,
    IsPresent,
    Notes,
    Duration,
    CreatedAt,
    UpdatedAt,
}
